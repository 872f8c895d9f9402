use cross_reference_arcs::data::{ColumnNames, parse_references};
use cross_reference_arcs::diagram::{FixedColor, RandomColors, Rgba, ViewerContext, render};
use cross_reference_arcs::error::DataLoadError;

const DATASET: &str = "\
verse,ref,votes
Gen.1.1,John.1.1,120
Gen.1.1,Heb.11.3,64
John.1.1,Gen.1.1,120
Ps.33.6,Gen.1.1,40
Heb.11.3,Ps.33.6,22
Rev.4.11,Gen.1.1,18
";

fn context() -> ViewerContext {
	ViewerContext::new(parse_references(DATASET, &ColumnNames::default()).unwrap())
}

fn gray() -> FixedColor {
	FixedColor(Rgba::opaque(128, 128, 128))
}

#[test]
fn index_is_a_bijection_over_all_identifiers() {
	let ctx = context();
	let index = ctx.index();
	assert_eq!(index.identifiers(), ["Gen.1.1", "Heb.11.3", "John.1.1", "Ps.33.6", "Rev.4.11"]);
	for (pos, id) in index.identifiers().iter().enumerate() {
		assert_eq!(index.position(id), Some(pos));
	}
}

#[test]
fn smaller_counts_draw_a_geometric_prefix() {
	let ctx = context();
	let full = render(&ctx, ctx.total(), &mut RandomColors::new());
	assert_eq!(full.arcs.len(), ctx.total());
	for n in 1..ctx.total() {
		let partial = render(&ctx, n, &mut gray());
		assert_eq!(partial.arcs.len(), n);
		assert!(partial.arcs.iter().zip(&full.arcs).all(|(a, b)| a.same_geometry(b)));
	}
}

#[test]
fn positions_do_not_move_with_the_slider() {
	let ctx = context();
	// Rev.4.11 only appears in the last row, yet already occupies position 4.
	let first = &render(&ctx, 1, &mut gray()).arcs[0];
	assert_eq!((first.start, first.end), (0, 2));
	let last = render(&ctx, 6, &mut gray()).arcs.pop().unwrap();
	assert_eq!((last.start, last.end), (4, 0));
	assert_eq!(last.height, 2.0);
	assert_eq!(last.mid, 2.0);
}

#[test]
fn repeated_renders_share_geometry() {
	let ctx = context();
	let a = render(&ctx, 4, &mut RandomColors::new());
	let b = render(&ctx, 4, &mut RandomColors::new());
	assert!(a.arcs.iter().zip(&b.arcs).all(|(x, y)| x.same_geometry(y)));
}

#[test]
fn missing_target_column_is_a_load_error() {
	let err = parse_references("verse,votes\nGen.1.1,3\n", &ColumnNames::default()).unwrap_err();
	assert_eq!(err, DataLoadError::MissingColumn("ref".into()));
}
