//! Example that demonstrates parsing, testing and emitting a range list.

fn main() {
    println!("=== Range list example ===");

    let ranges = rangelist::parse("0,3-5,7").unwrap();

    for index in 0..9 {
        let selected = rangelist::contains_any(&ranges, index);
        println!("Index {index} selected: {selected}");
    }

    println!("As range list: {}", rangelist::emit(&ranges));

    match rangelist::parse("5-2") {
        Ok(_) => println!("Unexpectedly parsed a reversed range"),
        Err(error) => println!("Rejected reversed range: {error}"),
    }

    println!("Range list example completed successfully!");
}
