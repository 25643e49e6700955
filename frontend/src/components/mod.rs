pub mod funnel_header;
pub mod progress_bar;
pub mod result_modal;
pub mod spin_button;
pub mod wheel_canvas;

pub use funnel_header::FunnelHeader;
pub use progress_bar::ProgressBar;
pub use result_modal::ResultModal;
pub use spin_button::SpinButton;
pub use wheel_canvas::WheelCanvas;
