pub mod codec;

pub use codec::{decode_rgb, encode_png, write_png};
