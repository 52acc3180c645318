// libpn5180/src/protocol/commands.rs

use crate::constants::DOWNLOAD_CMD_GET_VERSION;

/// Download-mode requests issued by the host itself (image chunks are sent
/// as-is and do not go through this type).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Query the running firmware version.
    GetVersion,
}

impl Command {
    pub fn command_code(&self) -> u8 {
        match self {
            Command::GetVersion => DOWNLOAD_CMD_GET_VERSION,
        }
    }

    /// Encode header + body. The CRC and direction marker are added by the
    /// frame layer.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            // length 4: command byte + three reserved bytes
            Command::GetVersion => vec![0x00, 0x04, self.command_code(), 0x00, 0x00, 0x00],
        }
    }
}
