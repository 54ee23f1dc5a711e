use super::theme::OneDark;
use dinein_core::{
    NormalizedInterval, SkippedEntry,
    day::format_days,
    render::format_hours,
};
use termimad::{MadSkin, crossterm::style::Stylize};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        let skin = if opts.use_color {
            OneDark::default_onedark_skin()
        } else {
            MadSkin::no_style()
        };
        Self { skin, opts }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    /// Banner lines only make sense on a terminal; plain output stays machine readable.
    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        }
    }

    pub fn print_line(&self, line: &str) {
        println!("{line}");
    }

    pub fn print_restaurants(&self, names: &[String]) {
        for name in names {
            if self.opts.use_color {
                println!("{}", name.as_str().with(OneDark::YELLOW));
            } else {
                println!("{name}");
            }
        }
    }

    pub fn print_intervals(&self, intervals: &[NormalizedInterval]) {
        for interval in intervals {
            let days = format_days(&interval.open_days);
            let hours = format!(
                "{} - {}",
                format_hours(interval.open_time),
                format_hours(interval.close_time)
            );
            if self.opts.use_color {
                println!("{} {}", days.with(OneDark::CYAN), hours.with(OneDark::BLUE));
            } else {
                println!("{days} {hours}");
            }
        }
    }

    pub fn print_skipped(&self, skipped: &[SkippedEntry]) {
        let md = skipped_report(skipped);
        if self.opts.use_color {
            self.print_md(&md);
        } else {
            print!("{md}");
        }
    }

    pub fn eprint_skipped(&self, skipped: &[SkippedEntry]) {
        let md = skipped_report(skipped);
        if self.opts.use_color {
            eprint!("{}", self.skin.term_text(&md));
        } else {
            eprint!("{md}");
        }
    }
}

fn skipped_report(skipped: &[SkippedEntry]) -> String {
    let mut md = String::from("\n# Errors:\n");
    for entry in skipped {
        md.push_str(&format!(
            "* Could not process '{}': {}\n",
            entry.restaurant, entry.error
        ));
    }
    md
}
