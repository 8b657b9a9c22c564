//! Contextual shaping and visual ordering for renderers without an Arabic
//! shaping engine.

use unicode_bidi::BidiInfo;

#[derive(Debug, Clone, Copy)]
enum Joining {
    /// Never joins (hamza).
    Isolated(char),
    /// Joins to the previous letter only: isolated, final.
    Right(char, char),
    /// Joins on both sides: isolated, final, initial, medial.
    Dual(char, char, char, char),
    /// Tatweel and ZWJ: joins both neighbours, drawn unchanged.
    Causing,
}

fn joining(c: char) -> Option<Joining> {
    use Joining::{Causing, Dual, Isolated, Right};

    let joining = match c {
        'ء' => Isolated('\u{FE80}'),
        'آ' => Right('\u{FE81}', '\u{FE82}'),
        'أ' => Right('\u{FE83}', '\u{FE84}'),
        'ؤ' => Right('\u{FE85}', '\u{FE86}'),
        'إ' => Right('\u{FE87}', '\u{FE88}'),
        'ئ' => Dual('\u{FE89}', '\u{FE8A}', '\u{FE8B}', '\u{FE8C}'),
        'ا' => Right('\u{FE8D}', '\u{FE8E}'),
        'ب' => Dual('\u{FE8F}', '\u{FE90}', '\u{FE91}', '\u{FE92}'),
        'ة' => Right('\u{FE93}', '\u{FE94}'),
        'ت' => Dual('\u{FE95}', '\u{FE96}', '\u{FE97}', '\u{FE98}'),
        'ث' => Dual('\u{FE99}', '\u{FE9A}', '\u{FE9B}', '\u{FE9C}'),
        'ج' => Dual('\u{FE9D}', '\u{FE9E}', '\u{FE9F}', '\u{FEA0}'),
        'ح' => Dual('\u{FEA1}', '\u{FEA2}', '\u{FEA3}', '\u{FEA4}'),
        'خ' => Dual('\u{FEA5}', '\u{FEA6}', '\u{FEA7}', '\u{FEA8}'),
        'د' => Right('\u{FEA9}', '\u{FEAA}'),
        'ذ' => Right('\u{FEAB}', '\u{FEAC}'),
        'ر' => Right('\u{FEAD}', '\u{FEAE}'),
        'ز' => Right('\u{FEAF}', '\u{FEB0}'),
        'س' => Dual('\u{FEB1}', '\u{FEB2}', '\u{FEB3}', '\u{FEB4}'),
        'ش' => Dual('\u{FEB5}', '\u{FEB6}', '\u{FEB7}', '\u{FEB8}'),
        'ص' => Dual('\u{FEB9}', '\u{FEBA}', '\u{FEBB}', '\u{FEBC}'),
        'ض' => Dual('\u{FEBD}', '\u{FEBE}', '\u{FEBF}', '\u{FEC0}'),
        'ط' => Dual('\u{FEC1}', '\u{FEC2}', '\u{FEC3}', '\u{FEC4}'),
        'ظ' => Dual('\u{FEC5}', '\u{FEC6}', '\u{FEC7}', '\u{FEC8}'),
        'ع' => Dual('\u{FEC9}', '\u{FECA}', '\u{FECB}', '\u{FECC}'),
        'غ' => Dual('\u{FECD}', '\u{FECE}', '\u{FECF}', '\u{FED0}'),
        'ف' => Dual('\u{FED1}', '\u{FED2}', '\u{FED3}', '\u{FED4}'),
        'ق' => Dual('\u{FED5}', '\u{FED6}', '\u{FED7}', '\u{FED8}'),
        'ك' => Dual('\u{FED9}', '\u{FEDA}', '\u{FEDB}', '\u{FEDC}'),
        'ل' => Dual('\u{FEDD}', '\u{FEDE}', '\u{FEDF}', '\u{FEE0}'),
        'م' => Dual('\u{FEE1}', '\u{FEE2}', '\u{FEE3}', '\u{FEE4}'),
        'ن' => Dual('\u{FEE5}', '\u{FEE6}', '\u{FEE7}', '\u{FEE8}'),
        'ه' => Dual('\u{FEE9}', '\u{FEEA}', '\u{FEEB}', '\u{FEEC}'),
        'و' => Right('\u{FEED}', '\u{FEEE}'),
        'ى' => Right('\u{FEEF}', '\u{FEF0}'),
        'ي' => Dual('\u{FEF1}', '\u{FEF2}', '\u{FEF3}', '\u{FEF4}'),
        'پ' => Dual('\u{FB56}', '\u{FB57}', '\u{FB58}', '\u{FB59}'),
        'چ' => Dual('\u{FB7A}', '\u{FB7B}', '\u{FB7C}', '\u{FB7D}'),
        'ژ' => Right('\u{FB8A}', '\u{FB8B}'),
        'ک' => Dual('\u{FB8E}', '\u{FB8F}', '\u{FB90}', '\u{FB91}'),
        'گ' => Dual('\u{FB92}', '\u{FB93}', '\u{FB94}', '\u{FB95}'),
        'ی' => Dual('\u{FBFC}', '\u{FBFD}', '\u{FBFE}', '\u{FBFF}'),
        'ۀ' => Right('\u{FBA4}', '\u{FBA5}'),
        '\u{0640}' | '\u{200D}' => Causing,
        _ => return None,
    };
    Some(joining)
}

/// Lam followed by one of these alefs becomes a single ligature:
/// isolated, final.
fn lam_alef(alef: char) -> Option<(char, char)> {
    match alef {
        'آ' => Some(('\u{FEF5}', '\u{FEF6}')),
        'أ' => Some(('\u{FEF7}', '\u{FEF8}')),
        'إ' => Some(('\u{FEF9}', '\u{FEFA}')),
        'ا' => Some(('\u{FEFB}', '\u{FEFC}')),
        _ => None,
    }
}

/// Harakat and other marks that do not interrupt joining.
fn is_transparent(c: char) -> bool {
    ('\u{064B}'..='\u{065F}').contains(&c) || c == '\u{0670}'
}

fn joins_forward(c: char) -> bool {
    matches!(joining(c), Some(Joining::Dual(..) | Joining::Causing))
}

fn joins_backward(c: char) -> bool {
    matches!(
        joining(c),
        Some(Joining::Right(..) | Joining::Dual(..) | Joining::Causing)
    )
}

fn previous_letter(chars: &[char], index: usize) -> Option<char> {
    chars[..index]
        .iter()
        .rev()
        .copied()
        .find(|&c| !is_transparent(c))
}

fn next_letter(chars: &[char], index: usize) -> Option<char> {
    chars
        .get(index + 1..)?
        .iter()
        .copied()
        .find(|&c| !is_transparent(c))
}

/// Replaces Arabic-script letters with their contextual presentation forms.
///
/// ZWNJ and any other non-joining character break the join and are kept
/// as is.
pub fn reshape(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut shaped = String::with_capacity(text.len() * 2);
    let mut index = 0;

    while index < chars.len() {
        let c = chars[index];
        let joined_before = previous_letter(&chars, index).is_some_and(joins_forward);

        if c == 'ل' {
            if let Some((isolated, final_form)) = chars.get(index + 1).copied().and_then(lam_alef)
            {
                shaped.push(if joined_before { final_form } else { isolated });
                index += 2;
                continue;
            }
        }

        match joining(c) {
            None | Some(Joining::Causing) => shaped.push(c),
            Some(Joining::Isolated(isolated)) => shaped.push(isolated),
            Some(Joining::Right(isolated, final_form)) => {
                shaped.push(if joined_before { final_form } else { isolated });
            }
            Some(Joining::Dual(isolated, final_form, initial, medial)) => {
                let joined_after = next_letter(&chars, index).is_some_and(joins_backward);
                shaped.push(match (joined_before, joined_after) {
                    (false, false) => isolated,
                    (true, false) => final_form,
                    (false, true) => initial,
                    (true, true) => medial,
                });
            }
        }
        index += 1;
    }
    shaped
}

/// Reorders logical-order text into left-to-right display order, one
/// paragraph at a time.
pub fn visual_order(text: &str) -> String {
    let info = BidiInfo::new(text, None);
    let mut visual = String::with_capacity(text.len());
    for paragraph in &info.paragraphs {
        visual.push_str(&info.reorder_line(paragraph, paragraph.range.clone()));
    }
    visual
}

#[cfg(test)]
mod tests {
    use super::{reshape, visual_order};

    #[test]
    fn letters_take_contextual_forms() {
        assert_eq!(reshape("به"), "\u{FE91}\u{FEEA}");
        assert_eq!(reshape("ببب"), "\u{FE91}\u{FE92}\u{FE90}");
        assert_eq!(reshape("د"), "\u{FEA9}");
    }

    #[test]
    fn heh_with_yeh_joins_to_the_previous_letter() {
        assert_eq!(reshape("خانۀ"), "\u{FEA7}\u{FE8E}\u{FEE7}\u{FBA5}");
        assert_eq!(reshape("ۀ"), "\u{FBA4}");
    }

    #[test]
    fn lam_alef_becomes_a_ligature() {
        assert_eq!(reshape("سلام"), "\u{FEB3}\u{FEFC}\u{FEE1}");
        assert_eq!(reshape("لا"), "\u{FEFB}");
    }

    #[test]
    fn zwnj_breaks_the_join() {
        assert_eq!(reshape("می\u{200C}ک"), "\u{FEE3}\u{FBFD}\u{200C}\u{FB8E}");
    }

    #[test]
    fn spaces_and_latin_pass_through() {
        assert_eq!(reshape("ب ب"), "\u{FE8F} \u{FE8F}");
        assert_eq!(reshape("abc"), "abc");
        assert_eq!(reshape(""), "");
    }

    #[test]
    fn right_to_left_text_is_reversed_for_display() {
        assert_eq!(visual_order(&reshape("به")), "\u{FEEA}\u{FE91}");
        assert_eq!(visual_order("abc"), "abc");
        assert_eq!(visual_order(""), "");
    }
}
