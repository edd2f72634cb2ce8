use std::mem;
use std::ops::RangeInclusive;

use lazy_static::lazy_static;
use linscan::{band_of, likely, max, print_error, search};

lazy_static! {
    static ref BANDS: Vec<RangeInclusive<i64>> = vec![1..=5, 6..=10];
}

fn main() {
    let nested_func = || {
        println!("I'm in nested function.");

        let mut x = 3.142_f32;
        let mut y = 2.718;
        mem::swap(&mut x, &mut y);
        println!("x: {x}, y: {y}");
    };
    nested_func();

    let keys = [2, 6, 8, 2, 7, 6, 5, 6, 6, 8];
    print!("Searching... ");
    print!("{} ", search(&keys, &2));
    println!("{}", search(&keys, &7));

    let sth = 5;
    if let Some(index) = band_of(&BANDS, &sth) {
        let band = &BANDS[index];
        println!("{sth} in [{}, {}]", band.start(), band.end());
    }

    if likely(max(12, 34) == 34) {
        print_error!("Everything goes well!");
    }
}
