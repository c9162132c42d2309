/// How a single trimmed line of an enum block was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Entry,
    Blank,
    Comment,
    Excluded,
}

pub fn classify_line(trimmed: &str, comment_prefix: &str, exclude: &[String]) -> LineKind {
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with(comment_prefix) {
        LineKind::Comment
    } else if exclude.iter().any(|e| e == trimmed) {
        LineKind::Excluded
    } else {
        LineKind::Entry
    }
}

/// Per-kind line counts for one filtering pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    pub entries: usize,
    pub blank: usize,
    pub comments: usize,
    pub excluded: usize,
}

impl FilterStats {
    fn record(&mut self, kind: LineKind) {
        match kind {
            LineKind::Entry => self.entries += 1,
            LineKind::Blank => self.blank += 1,
            LineKind::Comment => self.comments += 1,
            LineKind::Excluded => self.excluded += 1,
        }
    }
}

/// Split a block on `\n`, trim each line, and keep entry lines in source order.
pub fn filter_entries(
    body: &str,
    comment_prefix: &str,
    exclude: &[String],
) -> (Vec<String>, FilterStats) {
    let mut stats = FilterStats::default();
    let mut entries = Vec::new();

    for line in body.split('\n') {
        let trimmed = line.trim();
        let kind = classify_line(trimmed, comment_prefix, exclude);
        stats.record(kind);

        if kind == LineKind::Entry {
            entries.push(trimmed.to_string());
        }
    }

    (entries, stats)
}
