//! Icon shown at the trailing edge of the control.

use tuidom::Element;

use crate::error::{DropdownError, Result};

/// Icon override for the control.
///
/// Text icons are validated when the dropdown is built: they must be exactly
/// one character. An element icon is used as given.
#[derive(Debug, Clone, PartialEq)]
pub enum Icon {
    Text(String),
    Element(Box<Element>),
}

impl Icon {
    /// Check the single-character rule for text icons.
    pub fn validate(&self) -> Result<()> {
        match self {
            Icon::Text(text) => {
                let length = text.chars().count();
                if length == 1 {
                    Ok(())
                } else {
                    Err(DropdownError::IconLength {
                        icon: text.clone(),
                        length,
                    })
                }
            }
            Icon::Element(_) => Ok(()),
        }
    }

    pub(crate) fn to_element(&self, id: &str) -> Element {
        match self {
            Icon::Text(text) => Element::text(text.clone()).id(id),
            Icon::Element(element) => element.as_ref().clone().id(id),
        }
    }
}

impl From<&str> for Icon {
    fn from(text: &str) -> Self {
        Icon::Text(text.to_string())
    }
}

impl From<String> for Icon {
    fn from(text: String) -> Self {
        Icon::Text(text)
    }
}

impl From<char> for Icon {
    fn from(ch: char) -> Self {
        Icon::Text(ch.to_string())
    }
}

impl From<Element> for Icon {
    fn from(element: Element) -> Self {
        Icon::Element(Box::new(element))
    }
}
