//! Fixed-capacity lists of `(base unit, exponent)` pairs, manipulated at
//! compile time
//!
//! These are the building blocks of canonical unit tags: every operation here
//! is a pure `const fn` returning a new list. Since closures cannot be called
//! during constant evaluation, the element transformation, the collision
//! combiner and the filtering predicate are picked from small closed enums
//! ([`PowerMap`], [`Combine`], [`Prune`]). Ordering is always by ascending base
//! tag.

use core::fmt;

/// Maximal number of distinct base units a single unit expression may involve
pub const MAX_POWERS: usize = 16;

/// A base unit (identified by its tag) raised to some integer exponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Power {
    pub base: u32,
    pub exp: i32,
}

impl Power {
    pub const fn new(base: u32, exp: i32) -> Self {
        Power { base, exp }
    }

    /// The strict order used to sort and merge lists
    const fn lt(&self, other: &Power) -> bool {
        self.base < other.base
    }
}

/// Transformation applied to every element by [`PowerList::map`]
#[derive(Debug, Clone, Copy)]
pub enum PowerMap {
    /// Multiply the exponent by some factor
    RaiseBy(i32),
    /// Negate the exponent
    Invert,
}

impl PowerMap {
    const fn apply(self, p: Power) -> Power {
        let exp = match self {
            PowerMap::RaiseBy(k) => p.exp.checked_mul(k),
            PowerMap::Invert => p.exp.checked_neg(),
        };
        match exp {
            Some(exp) => Power::new(p.base, exp),
            None => panic!("unit exponent overflows i32"),
        }
    }
}

/// What [`PowerList::merge_with`] does with two elements sharing a base
#[derive(Debug, Clone, Copy)]
pub enum Combine {
    AddExponents,
    SubtractExponents,
}

impl Combine {
    const fn apply(self, a: Power, b: Power) -> Power {
        let exp = match self {
            Combine::AddExponents => a.exp.checked_add(b.exp),
            Combine::SubtractExponents => a.exp.checked_sub(b.exp),
        };
        match exp {
            Some(exp) => Power::new(a.base, exp),
            None => panic!("unit exponent overflows i32"),
        }
    }

    /// An element only present in the right-hand list is combined against an
    /// absent (zero) exponent
    const fn right_only(self, b: Power) -> Power {
        self.apply(Power::new(b.base, 0), b)
    }
}

/// Predicate for [`PowerList::remove_if`]
#[derive(Debug, Clone, Copy)]
pub enum Prune {
    ZeroExponent,
    NegativeExponent,
    PositiveExponent,
}

impl Prune {
    const fn matches(self, p: Power) -> bool {
        match self {
            Prune::ZeroExponent => p.exp == 0,
            Prune::NegativeExponent => p.exp < 0,
            Prune::PositiveExponent => p.exp > 0,
        }
    }
}

/// An ordered sequence of at most [`MAX_POWERS`] [`Power`]s
#[derive(Clone, Copy)]
pub struct PowerList {
    items: [Power; MAX_POWERS],
    len: usize,
}

const FILLER: Power = Power::new(0, 0);

impl PowerList {
    pub const EMPTY: PowerList = PowerList {
        items: [FILLER; MAX_POWERS],
        len: 0,
    };

    pub const fn single(p: Power) -> Self {
        Self::EMPTY.push(p)
    }

    /// Build a list holding `powers` in the given order
    pub const fn from_slice(powers: &[Power]) -> Self {
        let mut res = Self::EMPTY;
        let mut i = 0;
        while i < powers.len() {
            res = res.push(powers[i]);
            i += 1;
        }
        res
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn get(&self, i: usize) -> Option<Power> {
        if i < self.len {
            Some(self.items[i])
        } else {
            None
        }
    }

    /// Add an element at the end
    pub const fn push(mut self, p: Power) -> Self {
        assert!(
            self.len < MAX_POWERS,
            "too many base units in one unit expression"
        );
        self.items[self.len] = p;
        self.len += 1;
        self
    }

    /// Concatenation
    pub const fn append(self, other: PowerList) -> Self {
        let mut res = self;
        let mut i = 0;
        while i < other.len {
            res = res.push(other.items[i]);
            i += 1;
        }
        res
    }

    /// Apply `op` to every element, keeping their order
    pub const fn map(mut self, op: PowerMap) -> Self {
        let mut i = 0;
        while i < self.len {
            self.items[i] = op.apply(self.items[i]);
            i += 1;
        }
        self
    }

    /// Stable insertion sort by base tag. Lists are a handful of elements long
    pub const fn sort(mut self) -> Self {
        let mut i = 1;
        while i < self.len {
            let mut j = i;
            while j > 0 && self.items[j].lt(&self.items[j - 1]) {
                let tmp = self.items[j];
                self.items[j] = self.items[j - 1];
                self.items[j - 1] = tmp;
                j -= 1;
            }
            i += 1;
        }
        self
    }

    /// Merge two lists that are both sorted by base tag. When both lists hold
    /// an element with the same base, a single element obtained with `combine`
    /// replaces them
    pub const fn merge_with(self, combine: Combine, other: PowerList) -> Self {
        let mut res = Self::EMPTY;
        let (mut i, mut j) = (0, 0);
        while i < self.len && j < other.len {
            let (a, b) = (self.items[i], other.items[j]);
            if a.lt(&b) {
                res = res.push(a);
                i += 1;
            } else if b.lt(&a) {
                res = res.push(combine.right_only(b));
                j += 1;
            } else {
                res = res.push(combine.apply(a, b));
                i += 1;
                j += 1;
            }
        }
        while i < self.len {
            res = res.push(self.items[i]);
            i += 1;
        }
        while j < other.len {
            res = res.push(combine.right_only(other.items[j]));
            j += 1;
        }
        res
    }

    /// Drop every element matching `prune`
    pub const fn remove_if(self, prune: Prune) -> Self {
        let mut res = Self::EMPTY;
        let mut i = 0;
        while i < self.len {
            if !prune.matches(self.items[i]) {
                res = res.push(self.items[i]);
            }
            i += 1;
        }
        res
    }

    /// Element-wise equality, usable in const context
    pub const fn eq(&self, other: &PowerList) -> bool {
        if self.len != other.len {
            return false;
        }
        let mut i = 0;
        while i < self.len {
            let (a, b) = (self.items[i], other.items[i]);
            if a.base != b.base || a.exp != b.exp {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Whether the list is sorted by strictly ascending base tag, ie. without
    /// duplicates
    pub const fn is_strictly_sorted(&self) -> bool {
        let mut i = 1;
        while i < self.len {
            if !self.items[i - 1].lt(&self.items[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    pub fn as_slice(&self) -> &[Power] {
        &self.items[..self.len]
    }

    pub fn iter(&self) -> impl Iterator<Item = Power> + '_ {
        self.as_slice().iter().copied()
    }
}

impl Default for PowerList {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PartialEq for PowerList {
    fn eq(&self, other: &Self) -> bool {
        PowerList::eq(self, other)
    }
}

impl Eq for PowerList {}

impl core::hash::Hash for PowerList {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::hash::Hash::hash(self.as_slice(), state);
    }
}

impl fmt::Debug for PowerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|p| (p.base, p.exp)))
            .finish()
    }
}
