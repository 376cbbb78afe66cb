// Example: build a sequence, query a range, delete an element.
use cumseq::CumulativeSequence;
use cumseq_table::Table;

fn main() -> Result<(), cumseq::Error> {
    let mut seq = CumulativeSequence::<i64>::new();
    seq.extend([5, 8, 9, 3, 4, 1]);

    println!("Initial cumulative sequence:");
    println!("{}", Table::new(&seq));

    println!("\nSum of values from index 1 to 4:");
    println!("{}", seq.range_sum(1, 4)?);

    let removed = seq.delete(4)?;
    println!("\nCumulative sequence after deleting index 4 (value {removed}):");
    println!("{}", Table::new(&seq));

    Ok(())
}
