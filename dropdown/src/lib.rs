//! A dropdown (select) widget for the `tuidom` terminal document tree.
//!
//! The widget renders into a [`tuidom::Element`] tree and is driven by
//! [`tuidom::Event`]s. It keeps two pieces of session state, whether the
//! overlay is open and which row is highlighted, and reports commits through
//! callbacks on [`DropdownProps`].
//!
//! # Example
//!
//! ```ignore
//! use dropdown::{Dropdown, DropdownOption, DropdownProps};
//!
//! let mut fruit = Dropdown::new(
//!     DropdownProps::new(
//!         [
//!             DropdownOption::header("Fruit"),
//!             DropdownOption::value("apple"),
//!             DropdownOption::value("banana"),
//!             DropdownOption::separator(),
//!             DropdownOption::value("cherry"),
//!         ],
//!         Some("banana"),
//!     )
//!     .name("fruit")
//!     .on_value_change(|value, _| log::info!("picked {value}")),
//! )?;
//!
//! let tree = fruit.render()?;
//! ```

mod config;
mod error;
mod events;
mod icon;
mod item;
mod menu;
mod outside_click;
mod props;
mod render;
mod state;
mod widget;

pub use config::DropdownConfig;
pub use error::{DropdownError, Result};
pub use events::EventResult;
pub use icon::Icon;
pub use item::{DropdownItem, DropdownOption, Labeled};
pub use menu::{ScrollableMenu, ITEM_ID_ATTR};
pub use outside_click::OutsideClick;
pub use props::{BlurHandler, ChangeEvent, ChangeHandler, DropdownProps, ValueChangeHandler};
pub use render::NAME_ATTR;
pub use state::{DropdownId, DropdownState};
pub use widget::Dropdown;
