/// Template matching data types

/// Scale factors applied to the template before correlating.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleSet {
    factors: Vec<f32>,
}

/// Location and size of the winning match inside the searched frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    /// X coordinate of the top-left corner in the frame
    pub x: u32,
    /// Y coordinate of the top-left corner in the frame
    pub y: u32,
    /// Width of the scaled template
    pub width: u32,
    /// Height of the scaled template
    pub height: u32,
    /// Scale factor the template was resized by
    pub scale: f32,
}

/// Best match found in a single frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchResult {
    /// Correlation coefficient of the best match (0.0 when nothing matched)
    pub confidence: f32,
    /// Winning location, absent when every scale was skipped
    pub best: Option<Detection>,
}

impl ScaleSet {
    /// Linearly spaced factors from `min` to `max` inclusive.
    ///
    /// Each factor is computed from the endpoints directly so that values such
    /// as 1.0 come out exact instead of accumulating rounding error.
    pub fn linspace(min: f32, max: f32, steps: usize) -> Self {
        let factors = match steps {
            0 => Vec::new(),
            1 => vec![min],
            n => (0..n)
                .map(|i| min + (max - min) * i as f32 / (n - 1) as f32)
                .collect(),
        };
        Self { factors }
    }

    /// Explicit list of factors, kept in the given order.
    pub fn from_factors(factors: Vec<f32>) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &[f32] {
        &self.factors
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

impl Default for ScaleSet {
    /// 0.5x to 1.5x in steps of 0.1
    fn default() -> Self {
        Self::linspace(0.5, 1.5, 11)
    }
}

impl Detection {
    /// Center of the match, useful for drawing markers
    pub fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}

impl MatchResult {
    /// Result for a frame where no scale could be searched.
    pub fn no_match() -> Self {
        Self {
            confidence: 0.0,
            best: None,
        }
    }

    /// Decision rule gating the click: fires when the best score reaches the threshold.
    pub fn is_detection(&self, threshold: f32) -> bool {
        self.confidence >= threshold
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::no_match()
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.best {
            Some(d) => write!(
                f,
                "{:.3} at ({},{}) {}x{} scale={:.2}",
                self.confidence, d.x, d.y, d.width, d.height, d.scale
            ),
            None => write!(f, "no match"),
        }
    }
}
