//! Randomized checks of the reordering invariants against the headless editor.

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sort_folds::{LineRange, TextBuffer, sort_folds};
use sort_folds_headless::HeadlessEditor;

const KEYS: [&str; 7] = ["apple", "Apple", "banana", "BANANA", "cherry", "date", "Date"];

/// A document made of top-level folds separated by unfolded lines.
struct Document {
    leading: Vec<String>,
    /// Each fold's lines, followed by the unfolded lines after it.
    folds: Vec<(Vec<String>, Vec<String>)>,
}

impl Document {
    fn random(rng: &mut StdRng, id: usize) -> Self {
        let gap = |rng: &mut StdRng, tag: &str| -> Vec<String> {
            (0..rng.gen_range(0..3))
                .map(|i| format!("{tag} gap {i}"))
                .collect()
        };

        let leading = gap(rng, "lead");
        let folds = (0..rng.gen_range(0..8))
            .map(|fold| {
                let key = KEYS.choose(&mut *rng).copied().unwrap_or("apple");
                let mut lines = vec![format!("{key} {{{{{{")];
                lines.extend((0..rng.gen_range(0..4)).map(|i| format!("  {id}.{fold}.{i}")));
                lines.push("}}}".to_string());
                (lines, gap(rng, &format!("after {fold}")))
            })
            .collect();

        Self { leading, folds }
    }

    fn render(&self, blocks: &[&Vec<String>]) -> Vec<String> {
        let mut out = self.leading.clone();
        for (block, (_, gap)) in blocks.iter().zip(&self.folds) {
            out.extend(block.iter().cloned());
            out.extend(gap.iter().cloned());
        }
        out
    }

    fn original(&self) -> Vec<String> {
        let blocks: Vec<&Vec<String>> = self.folds.iter().map(|(lines, _)| lines).collect();
        self.render(&blocks)
    }

    fn expected_sorted(&self) -> Vec<String> {
        let mut blocks: Vec<&Vec<String>> = self.folds.iter().map(|(lines, _)| lines).collect();
        blocks.sort_by_key(|lines| lines[0].to_lowercase());
        self.render(&blocks)
    }
}

fn editor_for(lines: &[String]) -> HeadlessEditor {
    let mut editor = HeadlessEditor::new(&lines.join("\n"));
    editor.set_selection(LineRange::new(0, lines.len()));
    editor
}

#[test]
fn test_random_documents_sort_as_stable_permutation() {
    let mut rng = StdRng::seed_from_u64(0x5017_f01d);

    for id in 0..300 {
        let doc = Document::random(&mut rng, id);
        let original = doc.original();
        if original.is_empty() {
            continue;
        }
        let mut editor = editor_for(&original);

        let outcome = sort_folds(&mut editor, 0).unwrap();
        let sorted = editor.lines(0, editor.line_count()).unwrap();

        assert_eq!(outcome.spans.len(), doc.folds.len(), "document {id}");
        assert_eq!(sorted.len(), original.len(), "document {id}");
        assert_eq!(sorted, doc.expected_sorted(), "document {id}");

        let mut before = original.clone();
        let mut after = sorted.clone();
        before.sort();
        after.sort();
        assert_eq!(before, after, "document {id}");

        // Sorting sorted folds changes nothing.
        let again = sort_folds(&mut editor, 0).unwrap();
        assert_eq!(again.rewritten, 0, "document {id}");
        assert_eq!(editor.lines(0, editor.line_count()).unwrap(), sorted);
    }
}
