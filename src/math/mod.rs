pub mod apca;
pub mod checker;
pub mod color_parse;
pub mod composite;
pub mod hex;
pub mod threshold;
