use crate::{Error, IndexRange, Item};

/// Parses a [range list][crate] into its ranges, in the order they were written.
///
/// Duplicate and overlapping ranges are preserved as-is. Use [`contains_any()`][crate::contains_any]
/// to test membership against the union of the returned ranges.
///
/// See [package-level documentation][crate] for details.
///
/// # Errors
///
/// Returns an error if the input is empty or if any of the comma-separated items is not a valid
/// single index or `low-high` range.
pub fn parse(range_list: &str) -> crate::Result<Vec<IndexRange>> {
    if range_list.is_empty() {
        return Err(Error::new(
            range_list,
            "range list must contain at least one item",
        ));
    }

    range_list.split(',').map(parse_item).collect()
}

pub(crate) fn parse_item(item: &str) -> crate::Result<IndexRange> {
    if item.is_empty() {
        return Err(Error::new(item, "range list item must not be empty"));
    }

    if let Some((range_start, range_end_inc)) = item.split_once('-') {
        parse_range(range_start, range_end_inc)
    } else {
        parse_single(item).map(IndexRange::single)
    }
}

fn parse_range(range_start: &str, range_end_inc: &str) -> crate::Result<IndexRange> {
    let low = parse_integer(
        range_start,
        "range start could not be parsed as an integer",
    )?;

    let high = parse_integer(
        range_end_inc,
        "range end could not be parsed as an integer",
    )?;

    IndexRange::new(low, high)
}

fn parse_single(single_item: &str) -> crate::Result<Item> {
    parse_integer(
        single_item,
        "item was not a range but could not be parsed as an integer either",
    )
}

fn parse_integer(digits: &str, problem: &str) -> crate::Result<Item> {
    // `Item::from_str` also accepts a leading '+', which is not part of the format.
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::new(digits, problem));
    }

    digits
        .parse::<Item>()
        .map_err(|inner| Error::caused_by(digits, problem, inner))
}

/// Whether `index` lies within any of `ranges`.
#[must_use]
pub fn contains_any(ranges: &[IndexRange], index: Item) -> bool {
    ranges.iter().any(|range| range.contains(index))
}
