//! Card reader adapters.
//!
//! - **DeviceCardReader** - Reads a stripe reader exposed as a device file
//! - **ScriptedCardReader** - Replays canned chunks (testing/development)

mod device_card_reader;
mod scripted_card_reader;

pub use device_card_reader::{chunk_stream, DeviceCardReader, DEFAULT_CHUNK_SIZE};
pub use scripted_card_reader::ScriptedCardReader;
