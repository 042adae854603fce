//! VoiceNotes - voice notes on a kanban board
//!
//! This crate provides the core of a voice-notes app: an undo-capable,
//! write-through note store and a microphone recorder state machine, plus
//! the pipeline that turns a recording into a categorized note.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Notes, categories, versions, the board view, recording
//!   sessions and errors
//! - **Application**: `NoteStore`, `Recorder`, the capture use case and the
//!   port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (file storage, cpal capture,
//!   FLAC encoding, tokio ticker, XDG config)
//! - **CLI**: Command-line interface, interactive shell and presenter

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
