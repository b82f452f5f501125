use crate::config::Settings;
use crate::lessons;
use crate::tui;

pub fn main(lesson: Option<String>, settings: &Settings) -> anyhow::Result<()> {
    let start = match lesson.as_deref() {
        Some(slug) => {
            let idx = lessons::all().iter().position(|l| l.slug == slug);
            match idx {
                Some(i) => Some(i),
                None => {
                    let known: Vec<_> = lessons::all().iter().map(|l| l.slug).collect();
                    anyhow::bail!(
                        "unknown lesson '{}'; available: {}",
                        slug,
                        known.join(", ")
                    );
                }
            }
        }
        None => None,
    };
    tui::app::run(start, settings)
}
