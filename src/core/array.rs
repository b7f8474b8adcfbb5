use std::ops;

use super::dims::Dims;

/// Dense row-major storage addressed by [`Dims`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        let Dims(x, y) = pos;
        if x < 0 || y < 0 {
            return None;
        }

        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        let x = idx % self.width;
        let y = idx / self.width;

        Some(Dims(x as i32, y as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    /// Mutable access to two distinct items at once.
    ///
    /// Returns `None` if either position is out of bounds or both are the same.
    pub fn get_pair_mut(&mut self, a: Dims, b: Dims) -> Option<(&mut T, &mut T)> {
        let ia = self.dim_to_idx(a)?;
        let ib = self.dim_to_idx(b)?;

        if ia < ib {
            let (lo, hi) = self.buf.split_at_mut(ib);
            Some((&mut lo[ia], &mut hi[0]))
        } else if ib < ia {
            let (lo, hi) = self.buf.split_at_mut(ia);
            Some((&mut hi[0], &mut lo[ib]))
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    pub fn all(&self, f: impl Fn(&T) -> bool) -> bool {
        self.buf.iter().all(f)
    }
}

impl<T> Array2D<T> {
    /// Builds the array by calling `f` for every position, row by row.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(Dims) -> T) -> Self {
        let buf = Dims::iter_fill(Dims::ZERO, Dims(width as i32, height as i32))
            .map(&mut f)
            .collect();

        Self { buf, width, height }
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        let arr = Array2D::from_fn(3, 2, |_| 0u8);
        for pos in arr.iter_pos() {
            let idx = arr.dim_to_idx(pos).unwrap();
            assert_eq!(arr.idx_to_dim(idx), Some(pos));
        }

        assert_eq!(arr.dim_to_idx(Dims(3, 0)), None);
        assert_eq!(arr.dim_to_idx(Dims(0, 2)), None);
        assert_eq!(arr.dim_to_idx(Dims(-1, 0)), None);
    }

    #[test]
    fn from_fn_order() {
        let arr = Array2D::from_fn(2, 2, |pos| pos);
        assert_eq!(arr[Dims(1, 0)], Dims(1, 0));
        assert_eq!(arr[Dims(0, 1)], Dims(0, 1));
    }

    #[test]
    fn pair_mut() {
        let mut arr = Array2D::from_fn(2, 2, |_| 0);
        {
            let (a, b) = arr.get_pair_mut(Dims(1, 1), Dims(0, 0)).unwrap();
            *a = 1;
            *b = 2;
        }
        assert_eq!(arr[Dims(1, 1)], 1);
        assert_eq!(arr[Dims(0, 0)], 2);

        assert!(arr.get_pair_mut(Dims(0, 0), Dims(0, 0)).is_none());
        assert!(arr.get_pair_mut(Dims(0, 0), Dims(2, 0)).is_none());
    }
}
