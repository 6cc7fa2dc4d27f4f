use super::Cost;

use std::sync::Arc;

/// A Path through a Room, together with its total Cost.
///
/// Cloning and reversing a Path is cheap, since the steps are shared between all copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    path: Arc<[P]>,
    cost: Cost,
    is_reversed: bool,
}

impl<P> Path<P> {
    /// Creates a Path from its steps and total Cost
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path {
            path: path.into(),
            cost,
            is_reversed: false,
        }
    }

    /// The total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of steps in the Path, including the start and the end
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path has no steps
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The same Path walked the other way round.
    ///
    /// Walkbox distances are symmetric, so the Cost stays the same.
    pub fn reversed(&self) -> Path<P> {
        Path {
            path: self.path.clone(),
            cost: self.cost,
            is_reversed: !self.is_reversed,
        }
    }

    /// Returns an Iterator over the Path
    pub fn iter(&self) -> Iter<P> {
        Iter {
            iter: self.path.iter(),
            reversed: self.is_reversed,
        }
    }

    /// Copies the steps into a Vec, in walking order
    pub fn to_vec(&self) -> Vec<P>
    where
        P: Clone,
    {
        self.iter().cloned().collect()
    }
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
    type Output = P;
    #[track_caller]
    fn index(&self, index: usize) -> &P {
        let index = if self.is_reversed {
            self.path.len() - index - 1
        } else {
            index
        };
        &self.path[index]
    }
}

/// An Iterator over the steps of a [`Path`], in walking order
#[derive(Debug)]
pub struct Iter<'a, P> {
    iter: std::slice::Iter<'a, P>,
    reversed: bool,
}

impl<'a, P> Iterator for Iter<'a, P> {
    type Item = &'a P;
    fn next(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.iter.next_back()
        } else {
            self.iter.next()
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<P> DoubleEndedIterator for Iter<'_, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.reversed {
            self.iter.next()
        } else {
            self.iter.next_back()
        }
    }
}
impl<P> ExactSizeIterator for Iter<'_, P> {}
impl<P> std::iter::FusedIterator for Iter<'_, P> {}

impl<'a, P> IntoIterator for &'a Path<P> {
    type Item = &'a P;
    type IntoIter = Iter<'a, P>;
    fn into_iter(self) -> Iter<'a, P> {
        self.iter()
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        // we can't just use slice's eq because self might be reversed
        self.len() == rhs.len() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
    }
}

use std::cmp::Ordering;

impl<P: PartialEq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        self.cost.partial_cmp(&other.cost)
    }
}

use std::fmt;
impl<P: fmt::Debug> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        let mut steps = self.iter();
        match steps.next() {
            None => write!(fmt, "<empty>"),
            Some(first) => {
                write!(fmt, "{:?}", first)?;
                for p in steps {
                    write!(fmt, " -> {:?}", p)?;
                }
                Ok(())
            }
        }
    }
}
