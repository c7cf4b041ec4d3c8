//! Fixed-size tuple iteration over sequences.

use flatseq_traits::Sequence;

/// Iterator over consecutive `K`-element groups of a sequence.
///
/// Created by [`groups`].
#[derive(Debug)]
pub struct Groups<'a, S: ?Sized, const K: usize> {
    seq: &'a S,
    next: usize,
}

impl<S: ?Sized, const K: usize> Clone for Groups<'_, S, K> {
    fn clone(&self) -> Self {
        Self {
            seq: self.seq,
            next: self.next,
        }
    }
}

/// Walk `seq` in `[T; K]` groups. A trailing partial group is dropped.
///
/// ```rust
/// use flatseq::iter::groups;
///
/// let points = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let pairs: Vec<[f64; 2]> = groups::<2, _>(&points).collect();
/// assert_eq!(pairs, vec![[1.0, 2.0], [3.0, 4.0]]);
/// ```
pub fn groups<const K: usize, S: Sequence + ?Sized>(seq: &S) -> Groups<'_, S, K> {
    Groups { seq, next: 0 }
}

impl<S: Sequence + ?Sized, const K: usize> Iterator for Groups<'_, S, K> {
    type Item = [S::Elem; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next + K > self.seq.len() {
            return None;
        }
        let group = self.seq.get_n::<K>(self.next);
        self.next += K;
        Some(group)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.seq.len() - self.next.min(self.seq.len())) / K;
        (left, Some(left))
    }
}

impl<S: Sequence + ?Sized, const K: usize> ExactSizeIterator for Groups<'_, S, K> {}

/// Lock-step iterator over `K`-groups of one sequence and `L`-groups of
/// another. Created by [`zip_groups`].
#[derive(Debug)]
pub struct ZipGroups<'a, A: ?Sized, B: ?Sized, const K: usize, const L: usize> {
    a: Groups<'a, A, K>,
    b: Groups<'a, B, L>,
}

impl<A: ?Sized, B: ?Sized, const K: usize, const L: usize> Clone for ZipGroups<'_, A, B, K, L> {
    fn clone(&self) -> Self {
        Self {
            a: self.a.clone(),
            b: self.b.clone(),
        }
    }
}

/// Walk `a` in `K`-groups and `b` in `L`-groups together, stopping when
/// either runs out.
pub fn zip_groups<'a, const K: usize, const L: usize, A, B>(
    a: &'a A,
    b: &'a B,
) -> ZipGroups<'a, A, B, K, L>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
{
    ZipGroups {
        a: groups(a),
        b: groups(b),
    }
}

impl<A, B, const K: usize, const L: usize> Iterator for ZipGroups<'_, A, B, K, L>
where
    A: Sequence + ?Sized,
    B: Sequence + ?Sized,
{
    type Item = ([A::Elem; K], [B::Elem; L]);

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.a.next()?;
        let y = self.b.next()?;
        Some((x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.a.len().min(self.b.len());
        (n, Some(n))
    }
}
