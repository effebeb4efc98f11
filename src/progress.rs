//! Progress bar display for template batches

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for a batch of templates
pub struct ProgressDisplay {
    /// Progress bar over the discovered templates
    template_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total template count
    pub fn new(total_templates: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-");

        let template_pb = ProgressBar::new(total_templates);
        template_pb.set_style(style);

        Self { template_pb }
    }

    /// Update to show the template currently being processed
    pub fn update_template(&self, name: &str) {
        // Truncate long paths for display
        let display_name = if name.len() > 50 {
            format!("...{}", &name[name.len() - 47..])
        } else {
            name.to_string()
        };
        self.template_pb.set_message(display_name);
    }

    /// Increment template progress
    pub fn inc(&self) {
        self.template_pb.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.template_pb.finish_and_clear();
    }
}
