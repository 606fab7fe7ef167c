// Purpose - buffers handed between stages and the text boundary to plotting tools

pub mod buffer;
pub mod plot;

pub use buffer::SampleBuffer;
pub use plot::{format_sample, write_plot, PlotOptions, END_SENTINEL};
