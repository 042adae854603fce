//! Note domain module

mod board;
mod category;
mod color;
mod image;
#[allow(clippy::module_inception)]
mod note;
mod tags;
mod update;

pub use board::{due_reminders, Board, BoardQuery, Column, SortOrder};
pub use category::{NoteCategory, ALL_CATEGORIES};
pub use color::NoteColor;
pub use image::{encode_image_data_uri, image_mime_type, MAX_IMAGE_SIZE};
pub use note::{Note, NoteVersion, MAX_VERSIONS};
pub use tags::{merge_tags, parse_tags};
pub use update::{FieldUpdate, NoteUpdate};
