use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::data::Reference;

/// Maps every distinct identifier in a dataset to a position on the axis.
///
/// Sources and targets share one sorted axis. When every identifier is an
/// integer the order is numeric and identifiers are compared by value, so
/// `"01"` and `"1"` share a position. Otherwise identifiers are opaque strings
/// in lexicographic order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentifierIndex {
	ordered: Vec<String>,
	positions: HashMap<String, usize>,
}

impl IdentifierIndex {
	/// Index the union of all sources and targets in `references`.
	pub fn build(references: &[Reference]) -> Self {
		let distinct: BTreeSet<&str> = references
			.iter()
			.flat_map(|r| [r.source.as_str(), r.target.as_str()])
			.collect();

		if let Some(values) = numeric_values(&distinct) {
			return Self::numeric(values);
		}

		let ordered: Vec<String> = distinct.into_iter().map(str::to_string).collect();
		let positions = ordered
			.iter()
			.enumerate()
			.map(|(pos, id)| (id.clone(), pos))
			.collect();
		Self { ordered, positions }
	}

	// Every spelling resolves to the position of its value; the axis shows the
	// canonical form.
	fn numeric(values: BTreeMap<i64, Vec<&str>>) -> Self {
		let mut ordered = Vec::with_capacity(values.len());
		let mut positions = HashMap::new();
		for (pos, (value, spellings)) in values.into_iter().enumerate() {
			ordered.push(value.to_string());
			for spelling in spellings {
				positions.insert(spelling.to_string(), pos);
			}
		}
		Self { ordered, positions }
	}

	/// Axis position of `id`, if it occurs in the dataset.
	pub fn position(&self, id: &str) -> Option<usize> {
		self.positions.get(id).copied()
	}

	/// Identifier at axis position `pos`.
	pub fn identifier(&self, pos: usize) -> Option<&str> {
		self.ordered.get(pos).map(String::as_str)
	}

	/// Identifiers in axis order, numeric ones in canonical form.
	pub fn identifiers(&self) -> &[String] {
		&self.ordered
	}

	/// Number of axis positions.
	pub fn len(&self) -> usize {
		self.ordered.len()
	}

	/// True for an empty dataset.
	pub fn is_empty(&self) -> bool {
		self.ordered.is_empty()
	}
}

fn numeric_values<'a>(ids: &BTreeSet<&'a str>) -> Option<BTreeMap<i64, Vec<&'a str>>> {
	if ids.is_empty() {
		return None;
	}
	let mut values: BTreeMap<i64, Vec<&str>> = BTreeMap::new();
	for &id in ids {
		values.entry(id.parse().ok()?).or_default().push(id);
	}
	Some(values)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn refs(pairs: &[(&str, &str)]) -> Vec<Reference> {
		pairs.iter().map(|(s, t)| Reference::new(*s, *t)).collect()
	}

	#[test]
	fn sorted_union_of_sources_and_targets() {
		let index = IdentifierIndex::build(&refs(&[("B", "D"), ("A", "C"), ("B", "A")]));
		assert_eq!(index.identifiers(), ["A", "B", "C", "D"]);
		assert_eq!(index.position("C"), Some(2));
		assert_eq!(index.identifier(3), Some("D"));
		assert_eq!(index.position("E"), None);
	}

	#[test]
	fn bijection_onto_positions() {
		let index = IdentifierIndex::build(&refs(&[
			("Gen.1.1", "John.1.1"),
			("John.1.1", "Gen.1.1"),
			("Ps.23.1", "John.10.11"),
			("Gen.1.1", "Gen.1.1"),
		]));
		assert_eq!(index.len(), 4);
		let mut seen: Vec<usize> = index
			.identifiers()
			.iter()
			.map(|id| index.position(id).unwrap())
			.collect();
		seen.sort_unstable();
		assert_eq!(seen, vec![0, 1, 2, 3]);
	}

	#[test]
	fn target_only_identifiers_interleave() {
		let index = IdentifierIndex::build(&refs(&[("A", "Z"), ("C", "B")]));
		assert_eq!(index.identifiers(), ["A", "B", "C", "Z"]);
	}

	#[test]
	fn integer_identifiers_sort_numerically() {
		let index = IdentifierIndex::build(&refs(&[("10", "2"), ("1", "-3")]));
		assert_eq!(index.identifiers(), ["-3", "1", "2", "10"]);
	}

	#[test]
	fn integer_spellings_share_a_position() {
		let index = IdentifierIndex::build(&refs(&[("01", "1"), ("2", "10")]));
		assert_eq!(index.identifiers(), ["1", "2", "10"]);
		assert_eq!(index.len(), 3);
		assert_eq!(index.position("01"), Some(0));
		assert_eq!(index.position("1"), Some(0));
		assert_eq!(index.position("10"), Some(2));
		assert_eq!(index.position("002"), None);
	}

	#[test]
	fn mixed_identifiers_sort_lexicographically() {
		let index = IdentifierIndex::build(&refs(&[("10", "2"), ("a", "1")]));
		assert_eq!(index.identifiers(), ["1", "10", "2", "a"]);
	}

	#[test]
	fn empty_dataset() {
		let index = IdentifierIndex::build(&[]);
		assert!(index.is_empty());
	}
}
