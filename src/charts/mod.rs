pub mod bar;
pub mod figure;
pub mod line;
pub mod pie;
pub mod preview;

/// The three preview chart types. Each is rendered for every palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Line, ChartKind::Pie];

    pub fn file_stem(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Charts",
            ChartKind::Line => "Line Charts",
            ChartKind::Pie => "Pie Charts",
        }
    }

    /// Palettes per figure in the batched previews. Bar cells are short, so
    /// bar figures hold twice as many.
    pub fn batch_size(self) -> usize {
        match self {
            ChartKind::Bar => 200,
            ChartKind::Line | ChartKind::Pie => 100,
        }
    }
}
