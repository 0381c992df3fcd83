//! Iterator adapter walkthrough. Ten numbered transformations over fixed
//! inputs, so the output is byte-identical from run to run.

use std::fmt::Debug;

const WIDE_RULE: usize = 60;
const SECTION_RULE: usize = 40;

pub fn demo_text() -> String {
    let rule = "=".repeat(WIDE_RULE);
    let mut out = String::new();

    out.push_str(&format!("{rule}\nITERATOR ADAPTERS DEMO\n{rule}\n"));

    section(&mut out, "1. Mapping over a range");
    let squares: Vec<i32> = (0..10).map(|x| x * x).collect();
    line(&mut out, "Squares of 0-9", &squares);

    section(&mut out, "2. Filtering");
    let evens: Vec<i32> = (0..20).filter(|x| x % 2 == 0).collect();
    line(&mut out, "Even numbers 0-19", &evens);

    section(&mut out, "3. Mapping with a branch");
    let labels: Vec<&str> =
        (0..10).map(|x| if x % 2 == 0 { "Even" } else { "Odd" }).collect();
    line(&mut out, "Even/Odd labels for 0-9", &labels);

    section(&mut out, "4. String transforms");
    let words = ["hello", "world", "rust", "iterators"];
    let uppercase: Vec<String> = words.iter().map(|w| w.to_uppercase()).collect();
    line(&mut out, "Original", &words);
    line(&mut out, "Uppercase", &uppercase);

    section(&mut out, "5. Calling functions from adapters");
    fn double(n: i32) -> i32 {
        n * 2
    }
    let doubled: Vec<i32> = (0..5).map(double).collect();
    line(&mut out, "Doubled values", &doubled);

    section(&mut out, "6. Nested collection");
    let table: Vec<Vec<i32>> =
        (1..4).map(|i| (1..4).map(|j| i * j).collect()).collect();
    out.push_str("Multiplication table (3x3):\n");
    for row in &table {
        out.push_str(&format!("{row:?}\n"));
    }

    section(&mut out, "7. Flattening nested collections");
    let nested = [vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
    let flattened: Vec<i32> = nested.iter().flatten().copied().collect();
    line(&mut out, "Nested", &nested);
    line(&mut out, "Flattened", &flattened);

    section(&mut out, "8. Compound predicates");
    let divisible: Vec<i32> = (0..50).filter(|x| x % 3 == 0 && x % 5 == 0).collect();
    line(&mut out, "Divisible by both 3 and 5 (0-49)", &divisible);

    section(&mut out, "9. Building tuples");
    let pairs: Vec<(i32, i32)> = (0..5).map(|x| (x, x * x)).collect();
    line(&mut out, "Number and square pairs", &pairs);

    section(&mut out, "10. Filter and map combined");
    let numbers = [1, -2, 3, -4, 5, -6, 7, -8];
    let positive_squares: Vec<i32> =
        numbers.iter().filter(|&&x| x > 0).map(|&x| x * x).collect();
    line(&mut out, "Original", &numbers);
    line(&mut out, "Squares of positive numbers", &positive_squares);

    out.push_str(&format!("\n{rule}\nCOMPARISON: adapter chain vs explicit loop\n{rule}\n"));

    let mut explicit = Vec::new();
    for x in 0..5 {
        if x % 2 == 0 {
            explicit.push(x * x);
        }
    }
    let chained: Vec<i32> = (0..5).filter(|x| x % 2 == 0).map(|x| x * x).collect();

    line(&mut out, "\nExplicit loop result", &explicit);
    line(&mut out, "Adapter chain result", &chained);
    out.push_str("\nBoth produce the same result; the chain states the intent in one expression.\n");

    out
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("\n{title}\n{}\n", "-".repeat(SECTION_RULE)));
}

fn line<T: Debug>(out: &mut String, label: &str, value: &T) {
    out.push_str(&format!("{label}: {value:?}\n"));
}
