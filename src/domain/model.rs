use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

const ASCII_LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Primitive type a generated column can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Integer,
    Float,
    Text,
}

impl ColumnType {
    pub const ALL: [ColumnType; 3] = [ColumnType::Integer, ColumnType::Float, ColumnType::Text];

    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Text => "text",
        }
    }

    /// Draws one of the three types uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> ColumnType {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Samples a single value of this type.
    ///
    /// Ranges: integers are uniform in [-1_000_000, 1_000_000]; floats are
    /// uniform over [f64::MIN_POSITIVE, f64::MAX), the full positive span of
    /// f64 except MAX itself (so nearly all samples land at very large
    /// magnitudes); text is 5 to 20 random ASCII letters.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Value {
        match self {
            ColumnType::Integer => Value::Integer(rng.gen_range(-1_000_000..=1_000_000)),
            // Half-open: an inclusive upper bound of f64::MAX overflows the
            // uniform sampler's scale computation and panics.
            ColumnType::Float => Value::Float(rng.gen_range(f64::MIN_POSITIVE..f64::MAX)),
            ColumnType::Text => {
                let len = rng.gen_range(5..=20);
                let s = (0..len)
                    .map(|_| ASCII_LETTERS[rng.gen_range(0..ASCII_LETTERS.len())] as char)
                    .collect();
                Value::Text(s)
            }
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One column of the output schema, fixed before any row is generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub index: usize,
    pub column_type: ColumnType,
    pub header: String,
}

impl Column {
    pub fn new(index: usize, column_type: ColumnType) -> Self {
        let header = format!("column{}_{}", index + 1, column_type.name());
        Self {
            index,
            column_type,
            header,
        }
    }
}

/// A single generated cell, serialized immediately after creation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(v) => f.write_str(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_header_label_encodes_index_and_type() {
        let col = Column::new(0, ColumnType::Integer);
        assert_eq!(col.header, "column1_integer");

        let col = Column::new(4, ColumnType::Text);
        assert_eq!(col.header, "column5_text");
    }

    #[test]
    fn test_integer_samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            match ColumnType::Integer.sample(&mut rng) {
                Value::Integer(v) => assert!((-1_000_000..=1_000_000).contains(&v)),
                other => panic!("expected integer, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_float_samples_cover_full_span_without_panicking() {
        // The span reaches up to f64::MAX; an inclusive range here used to
        // overflow the uniform sampler and abort on the first draw.
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100_000 {
            match ColumnType::Float.sample(&mut rng) {
                Value::Float(v) => {
                    assert!(v >= f64::MIN_POSITIVE && v.is_finite());
                }
                other => panic!("expected float, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_text_samples_are_alphabetic_with_bounded_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            match ColumnType::Text.sample(&mut rng) {
                Value::Text(s) => {
                    assert!((5..=20).contains(&s.len()));
                    assert!(s.chars().all(|c| c.is_ascii_alphabetic()));
                }
                other => panic!("expected text, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_random_type_covers_all_variants() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 3];
        for _ in 0..100 {
            match ColumnType::random(&mut rng) {
                ColumnType::Integer => seen[0] = true,
                ColumnType::Float => seen[1] = true,
                ColumnType::Text => seen[2] = true,
            }
        }
        assert_eq!(seen, [true, true, true]);
    }
}
