//! Option entries and the trait for values a dropdown can hold.

/// Trait for values that can be selected in a [`Dropdown`](crate::Dropdown).
///
/// Equality decides which row is checked and whether a commit is a change;
/// the label is what the control and the row show.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, PartialEq)]
/// struct Priority {
///     id: u32,
///     name: String,
/// }
///
/// impl DropdownItem for Priority {
///     fn item_label(&self) -> String {
///         self.name.clone()
///     }
/// }
/// ```
pub trait DropdownItem: Clone + PartialEq {
    /// Display text for this value.
    fn item_label(&self) -> String;
}

impl DropdownItem for String {
    fn item_label(&self) -> String {
        self.clone()
    }
}

impl DropdownItem for &'static str {
    fn item_label(&self) -> String {
        (*self).to_string()
    }
}

macro_rules! impl_item_for_numbers {
    ($($ty:ty),*) => {
        $(
            impl DropdownItem for $ty {
                fn item_label(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_item_for_numbers!(i32, i64, u8, u16, u32, u64, usize);

/// A value with a separate display label.
///
/// Two `Labeled` values are equal when their values are equal, whatever
/// their labels say.
#[derive(Debug, Clone)]
pub struct Labeled<V> {
    pub value: V,
    pub label: String,
}

impl<V> Labeled<V> {
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

impl<V: PartialEq> PartialEq for Labeled<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Clone + PartialEq> DropdownItem for Labeled<V> {
    fn item_label(&self) -> String {
        self.label.clone()
    }
}

/// One entry of the option list. List position is display order.
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownOption<T> {
    /// Non-interactive group label.
    Header(String),
    /// Divider line.
    Separator,
    /// Selectable value.
    Value(T),
}

impl<T> DropdownOption<T> {
    pub fn header(label: impl Into<String>) -> Self {
        Self::Header(label.into())
    }

    pub fn separator() -> Self {
        Self::Separator
    }

    pub fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// The selectable value, if this entry is one.
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl<T: DropdownItem> From<T> for DropdownOption<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// Index of the first `Value` entry equal to `value`.
pub(crate) fn position_of<T: PartialEq>(options: &[DropdownOption<T>], value: &T) -> Option<usize> {
    options
        .iter()
        .position(|option| option.as_value() == Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_equality_ignores_label() {
        assert_eq!(Labeled::new(1, "one"), Labeled::new(1, "uno"));
        assert_ne!(Labeled::new(1, "one"), Labeled::new(2, "one"));
    }

    #[test]
    fn position_skips_headers_and_separators() {
        let options = vec![
            DropdownOption::header("Fruit"),
            DropdownOption::value("apple"),
            DropdownOption::separator(),
            DropdownOption::value("cherry"),
        ];
        assert_eq!(position_of(&options, &"cherry"), Some(3));
        assert_eq!(position_of(&options, &"grape"), None);
    }
}
