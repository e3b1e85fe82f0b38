use super::*;

// Produce the correct len() method for arrays, slices, and vecs
macro_rules! length {
    (array) => {
        fn len(&self) -> usize {
            N
        }
    };

    (slice) => {
        fn len(&self) -> usize {
            (**self).len()
        }
    };

    (vec) => {
        fn len(&self) -> usize {
            self.len()
        }
    };
}

// Anything indexable twice, with two f64 elements per coordinate tuple
macro_rules! coordinate_set_impl_2d {
    ($len:ident) => {
        length!($len);

        fn xy(&self, index: usize) -> (f64, f64) {
            (self[index][0], self[index][1])
        }

        fn set_xy(&mut self, index: usize, x: f64, y: f64) {
            self[index][0] = x;
            self[index][1] = y;
        }
    };
}

// ----- CoordinateSet implementations for some Coor2D containers ------------

impl<const N: usize> CoordinateSet for [Coor2D; N] {
    coordinate_set_impl_2d!(array);
}

impl CoordinateSet for &mut [Coor2D] {
    coordinate_set_impl_2d!(slice);
}

impl CoordinateSet for Vec<Coor2D> {
    coordinate_set_impl_2d!(vec);
}

// ----- CoordinateSet implementations for plain arrays of [f64; 2] ----------

impl<const N: usize> CoordinateSet for [[f64; 2]; N] {
    coordinate_set_impl_2d!(array);
}

impl CoordinateSet for &mut [[f64; 2]] {
    coordinate_set_impl_2d!(slice);
}

impl CoordinateSet for Vec<[f64; 2]> {
    coordinate_set_impl_2d!(vec);
}

// ----- T E S T S ---------------------------------------------------
