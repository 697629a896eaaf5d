use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrollFrameError {
    #[error(
        "Terminal too small: need at least {required_width}x{required_height}, got {width}x{height}"
    )]
    TerminalTooSmall {
        width: u16,
        height: u16,
        required_width: u16,
        required_height: u16,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
