//! Attribution tags
//!
//! A tag names who is responsible for a change. It is an ordered chain of
//! segments, outermost mechanism first and root actor last:
//!
//! ```text
//! #tnt-#bed-Alice
//!  │    │    └── observed actor (bare)
//!  │    └─────── inferred mechanism: Alice used a bed
//!  └──────────── inferred mechanism: the bed blast lit TNT
//! ```
//!
//! A `#` marks an inferred segment; a bare segment was observed directly.
//! The rendered string is what the audit log stores.

use crate::error::{Error, Result};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// One link in an attribution chain
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    name: String,
    inferred: bool,
}

impl Segment {
    /// Segment name without the `#` marker
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this link was inferred rather than observed
    pub fn is_inferred(&self) -> bool {
        self.inferred
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inferred {
            f.write_str("#")?;
        }
        f.write_str(&self.name)
    }
}

/// Responsibility chain attached to a position or entity
///
/// Tags are cheap to clone for the common depths (up to four segments live
/// inline). An empty tag means "nothing resolved" and is never stored.
///
/// # Examples
///
/// ```
/// use causeway_core::AttributionTag;
///
/// let alice = AttributionTag::direct("Alice");
/// assert_eq!(alice.to_string(), "Alice");
///
/// let blast = alice.relay("bed").relay("tnt");
/// assert_eq!(blast.to_string(), "#tnt-#bed-Alice");
/// assert_eq!(blast.root(), Some("Alice"));
/// assert_eq!(blast.upstream().unwrap().to_string(), "#bed-Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AttributionTag {
    segments: SmallVec<[Segment; 4]>,
}

impl AttributionTag {
    /// A tag naming an observed actor
    pub fn direct(actor: impl Into<String>) -> Self {
        Self::single(actor.into(), false)
    }

    /// A tag naming an actor that was only inferred (e.g. a combat target)
    pub fn inferred(actor: impl Into<String>) -> Self {
        Self::single(actor.into(), true)
    }

    fn single(name: String, inferred: bool) -> Self {
        let mut segments = SmallVec::new();
        if !name.is_empty() {
            segments.push(Segment { name, inferred });
        }
        Self { segments }
    }

    /// Wrap this tag in an inferred mechanism: `t` becomes `#mechanism-t`
    ///
    /// Relaying an empty tag (or through an empty mechanism name) yields an
    /// empty tag.
    pub fn relay(&self, mechanism: impl Into<String>) -> Self {
        self.prepend(mechanism.into(), true)
    }

    /// Prefix an observed segment: `t` becomes `mechanism-t`
    ///
    /// Used when a player directly launched the mechanism, e.g. `Arrow-Alice`.
    pub fn observed_through(&self, mechanism: impl Into<String>) -> Self {
        self.prepend(mechanism.into(), false)
    }

    fn prepend(&self, name: String, inferred: bool) -> Self {
        if self.is_empty() || name.is_empty() {
            return Self::default();
        }
        let mut segments = SmallVec::with_capacity(self.segments.len() + 1);
        segments.push(Segment { name, inferred });
        segments.extend(self.segments.iter().cloned());
        Self { segments }
    }

    /// Strip the outermost segment
    ///
    /// Returns `None` when nothing upstream remains.
    pub fn upstream(&self) -> Option<AttributionTag> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(Self {
            segments: self.segments[1..].iter().cloned().collect(),
        })
    }

    /// The root actor at the end of the chain
    pub fn root(&self) -> Option<&str> {
        self.segments.last().map(|s| s.name.as_str())
    }

    /// The outermost mechanism or actor
    pub fn head(&self) -> Option<&Segment> {
        self.segments.first()
    }

    /// Number of segments
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// True when the outermost segment was observed, not inferred
    pub fn is_direct(&self) -> bool {
        self.head().map_or(false, |s| !s.inferred)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl fmt::Display for AttributionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// Parse the legacy string form
///
/// Segments are split on `-`; actor names therefore must not contain `-`,
/// which holds for player names and registry keys.
impl FromStr for AttributionTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidTag("empty tag".to_string()));
        }
        let mut segments = SmallVec::new();
        for part in s.split('-') {
            let (name, inferred) = match part.strip_prefix('#') {
                Some(rest) => (rest, true),
                None => (part, false),
            };
            if name.is_empty() {
                return Err(Error::InvalidTag(format!("empty segment in {:?}", s)));
            }
            segments.push(Segment {
                name: name.to_string(),
                inferred,
            });
        }
        Ok(Self { segments })
    }
}
