//! Error messages: construction, arguments, rendering and collection.
//!
//! A failed constraint produces an [`ErrorMessage`] through the
//! [`ErrorMessageBuilder`]. Messages keep their arguments typed until
//! [`render`](ErrorMessage::render) formats them with a [`FormatProvider`].
//! Member constraint sets write messages into an [`ErrorMessageReader`],
//! usually an [`ErrorMessageCollection`].

mod argument;
mod builder;
mod error_message;
mod format;
mod reader;
pub mod resources;

pub use argument::{Argument, MessageArguments, ToArgument};
pub use builder::ErrorMessageBuilder;
pub use error_message::ErrorMessage;
pub use format::FormatProvider;
pub use reader::{DiscardReader, ErrorMessageCollection, ErrorMessageReader};
