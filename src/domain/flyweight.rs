//! Flyweight: shared glyphs handed out by a get-or-create pool.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use tracing::{debug, trace};

/// Default intrinsic width of a freshly created glyph.
pub const DEFAULT_WIDTH: u32 = 120;
/// Default intrinsic height of a freshly created glyph.
pub const DEFAULT_HEIGHT: u32 = 100;

/// Keyed pool of shared values.
///
/// The constructor passed to [`FlyweightPool::get_or_insert_with`] runs at most
/// once per distinct key for the lifetime of the pool.
#[derive(Debug)]
pub struct FlyweightPool<K, V> {
    entries: HashMap<K, Rc<V>>,
}

impl<K, V> Default for FlyweightPool<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + fmt::Debug, V> FlyweightPool<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared value for `key`, built by `create` on the first request only.
    pub fn get_or_insert_with(&mut self, key: K, create: impl FnOnce(&K) -> V) -> Rc<V> {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                trace!(key = ?entry.key(), "flyweight hit");
                Rc::clone(entry.get())
            }
            Entry::Vacant(entry) => {
                debug!(key = ?entry.key(), "flyweight miss, creating entry");
                let value = Rc::new(create(entry.key()));
                Rc::clone(entry.insert(value))
            }
        }
    }

    /// Lookup without creating.
    pub fn peek(&self, key: &K) -> Option<Rc<V>> {
        self.entries.get(key).cloned()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.keys()
    }
}

/// Intrinsic glyph state, shared by every occurrence of the symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    symbol: char,
    width: u32,
    height: u32,
}

impl Glyph {
    pub fn new(symbol: char, width: u32, height: u32) -> Self {
        Self {
            symbol,
            width,
            height,
        }
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Combine intrinsic state with the caller's point size.
    pub fn display(&self, point_size: u32) -> String {
        format!("{} (point size {})", self.symbol, point_size)
    }
}

/// Glyph factory: one shared [`Glyph`] per character.
#[derive(Debug)]
pub struct GlyphFactory {
    pool: FlyweightPool<char, Glyph>,
    width: u32,
    height: u32,
}

impl Default for GlyphFactory {
    fn default() -> Self {
        Self::with_dimensions(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl GlyphFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory whose new glyphs get the given intrinsic dimensions.
    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self {
            pool: FlyweightPool::new(),
            width,
            height,
        }
    }

    pub fn get(&mut self, symbol: char) -> Rc<Glyph> {
        let (width, height) = (self.width, self.height);
        self.pool
            .get_or_insert_with(symbol, |&s| Glyph::new(s, width, height))
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.pool.contains(&symbol)
    }

    /// Number of distinct glyphs created so far.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}
