pub mod mocks;

pub use mocks::{MockTransport, NotifierEvent, RecordingNotifier};
