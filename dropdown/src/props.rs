//! Construction inputs for a dropdown.

use std::fmt;
use std::sync::Arc;

use crate::config::DropdownConfig;
use crate::icon::Icon;
use crate::item::DropdownOption;

/// Generic change notification, mirroring a form input's change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Id of the control element that changed.
    pub target: String,
    /// Field name, when one was given.
    pub name: Option<String>,
    /// Label of the newly selected value.
    pub value: String,
    /// List position of the newly selected option.
    pub index: usize,
}

/// Called with every committed change.
pub type ChangeHandler = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;

/// Called with the newly selected value and the field name.
pub type ValueChangeHandler<T> = Arc<dyn Fn(&T, Option<&str>) + Send + Sync>;

/// Called when the overlay closes.
pub type BlurHandler = Arc<dyn Fn() + Send + Sync>;

/// Everything the caller controls about a dropdown.
///
/// The value is controlled: the widget never changes it on its own, it only
/// reports commits through the callbacks. Feed the new value back with
/// [`Dropdown::set_value`](crate::Dropdown::set_value).
///
/// # Example
///
/// ```ignore
/// let props = DropdownProps::new(
///     [
///         DropdownOption::header("Fruit"),
///         DropdownOption::value("apple"),
///         DropdownOption::value("banana"),
///     ],
///     Some("banana"),
/// )
/// .name("fruit")
/// .placeholder("Pick one")
/// .on_value_change(|value, name| log::info!("{name:?} = {value}"));
/// ```
#[derive(Clone)]
pub struct DropdownProps<T> {
    pub(crate) id: Option<String>,
    pub(crate) options: Vec<DropdownOption<T>>,
    pub(crate) value: Option<T>,
    pub(crate) disabled: bool,
    pub(crate) icon: Option<Icon>,
    pub(crate) name: Option<String>,
    pub(crate) no_border: bool,
    pub(crate) placeholder: Option<String>,
    pub(crate) on_change: Option<ChangeHandler>,
    pub(crate) on_value_change: Option<ValueChangeHandler<T>>,
    pub(crate) on_blur: Option<BlurHandler>,
    pub(crate) config: DropdownConfig,
}

impl<T> DropdownProps<T> {
    /// Create props from an option list and the current value.
    pub fn new(options: impl IntoIterator<Item = DropdownOption<T>>, value: Option<T>) -> Self {
        Self {
            id: None,
            options: options.into_iter().collect(),
            value,
            disabled: false,
            icon: None,
            name: None,
            no_border: false,
            placeholder: None,
            on_change: None,
            on_value_change: None,
            on_blur: None,
            config: DropdownConfig::default(),
        }
    }

    /// Set the root element id. Defaults to a generated `__dropdown_N`.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Override the trailing icon.
    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Field name reported with value changes.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Draw the control without a border.
    pub fn no_border(mut self, no_border: bool) -> Self {
        self.no_border = no_border;
        self
    }

    /// Text shown while the value is `None`.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn on_change(mut self, handler: impl Fn(&ChangeEvent) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(handler));
        self
    }

    pub fn on_value_change(
        mut self,
        handler: impl Fn(&T, Option<&str>) + Send + Sync + 'static,
    ) -> Self {
        self.on_value_change = Some(Arc::new(handler));
        self
    }

    pub fn on_blur(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_blur = Some(Arc::new(handler));
        self
    }

    pub fn config(mut self, config: DropdownConfig) -> Self {
        self.config = config;
        self
    }

    pub fn options(&self) -> &[DropdownOption<T>] {
        &self.options
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl<T: fmt::Debug> fmt::Debug for DropdownProps<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownProps")
            .field("id", &self.id)
            .field("options", &self.options)
            .field("value", &self.value)
            .field("disabled", &self.disabled)
            .field("icon", &self.icon)
            .field("name", &self.name)
            .field("no_border", &self.no_border)
            .field("placeholder", &self.placeholder)
            .field("on_change", &self.on_change.is_some())
            .field("on_value_change", &self.on_value_change.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .finish_non_exhaustive()
    }
}
