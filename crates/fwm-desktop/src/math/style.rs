//! Frame style constants

/// Frame metrics shared by hit testing and the browser chrome
pub struct FrameStyle {
    pub title_bar_height: i32,
    pub resize_handle_size: i32,
    pub corner_handle_size: i32,
    pub button_size: i32,
    pub button_margin: i32,
}

/// Default frame style matching the window chrome
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 24,
    resize_handle_size: 6,
    corner_handle_size: 12,
    button_size: 16,
    button_margin: 4,
};
