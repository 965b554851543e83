use std::{
    io::{self, Write},
    time::{Duration, Instant},
};

/// Time spent rendering one chart kind, and how many images it produced.
pub struct RenderSplit {
    pub label: String,
    pub image_count: usize,
    pub duration: Duration,
}

impl RenderSplit {
    pub fn display<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let plural = if self.image_count == 1 { "" } else { "s" };
        write!(
            writer,
            "{}: {} image{} in {:.2}s",
            self.label,
            self.image_count,
            plural,
            self.duration.as_secs_f64()
        )
    }
}

/// Wall-clock timing for one generator run, one split per rendered chart kind.
pub struct Stopwatch {
    pub splits: Vec<RenderSplit>,
    pub name: String,
    start_total: Instant,
    start_split: Instant,
}

impl Stopwatch {
    pub fn new(name: &str) -> Stopwatch {
        let now = Instant::now();
        Stopwatch {
            splits: Vec::new(),
            name: name.to_owned(),
            start_total: now,
            start_split: now,
        }
    }

    pub fn total_elapsed(&self) -> Duration {
        self.start_total.elapsed()
    }

    pub fn image_count(&self) -> usize {
        self.splits.iter().map(|split| split.image_count).sum()
    }

    /// Closes the current split and starts the next one.
    pub fn record_split(&mut self, label: &str, image_count: usize) -> Duration {
        let duration = self.start_split.elapsed();
        self.start_split = Instant::now();
        self.splits.push(RenderSplit {
            label: label.to_owned(),
            image_count,
            duration,
        });
        duration
    }

    pub fn display<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(
            writer,
            "INFO:  {}: {} images in {:.2}s",
            self.name,
            self.image_count(),
            self.total_elapsed().as_secs_f64()
        )?;
        for split in self.splits.iter() {
            write!(writer, "INFO:    ")?;
            split.display(writer)?;
            writeln!(writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_splits_in_order() {
        let mut stopwatch = Stopwatch::new("Palette previews");
        stopwatch.record_split("bar", 2);
        stopwatch.record_split("line", 1);

        let mut buffer = Vec::new();
        stopwatch.display(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("INFO:  Palette previews: 3 images in "));
        assert!(lines[1].starts_with("INFO:    bar: 2 images in "));
        assert!(lines[2].starts_with("INFO:    line: 1 image in "));
        assert!(lines[2].ends_with('s'));
    }

    #[test]
    fn test_splits_are_consecutive() {
        let mut stopwatch = Stopwatch::new("Palette previews");
        let first = stopwatch.record_split("bar", 1);
        let second = stopwatch.record_split("pie", 1);

        assert_eq!(stopwatch.image_count(), 2);
        assert!(first + second <= stopwatch.total_elapsed());
    }
}
