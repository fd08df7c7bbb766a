//! Domain Models

pub mod event;
pub mod inquiry;
pub mod popup;
pub mod shop;
pub mod slider;

// Re-exports
pub use event::{Event, EventCreate, EventUpdate};
pub use inquiry::{Inquiry, InquiryCreate, InquiryKind, InquiryStatus};
pub use popup::{Popup, PopupCreate, PopupFrequency, PopupUpdate};
pub use shop::{Shop, ShopCategory, ShopCreate, ShopUpdate};
pub use slider::{Slider, SliderCreate, SliderUpdate, SortOrderUpdate};
