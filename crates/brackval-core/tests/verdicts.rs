use brackval_core::{Verdict, counterpart_of, is_opener, validate};

macro_rules! verdict_tests {
    ($($name:ident: $input:expr => $verdict:ident),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                assert_eq!(validate($input), Verdict::$verdict);
            }
        )*
    };
}

verdict_tests!(
    empty: "" => Valid,
    single_pair: "()" => Valid,
    three_pair_kinds: "()[]{}" => Valid,
    nested: "{[]}" => Valid,
    deeply_nested: "([{()}])" => Valid,
    mismatched_pair: "(]" => Invalid,
    interleaved: "([)]" => Invalid,
    closer_before_opener: ")(" => Invalid,
    lone_closer: ")" => Invalid,
    lone_opener: "(" => Invalid,
    unmatched_tail: "()(" => Invalid,
    letter_inside: "(a)" => MalformedInput,
    space_inside: "( )" => MalformedInput,
    text_after_balanced_pairs: "{}x" => MalformedInput,
);

const ALPHABET: [char; 6] = ['(', ')', '[', ']', '{', '}'];

/// Reference semantics: a well-formed sequence is balanced iff it reduces to
/// empty by repeatedly deleting adjacent matching opener/closer pairs.
fn reduces_to_empty(input: &str) -> bool {
    let mut chars: Vec<char> = input.chars().collect();
    loop {
        let before = chars.len();
        let mut i = 0;
        while i + 1 < chars.len() {
            if is_opener(chars[i]) && counterpart_of(chars[i + 1]) == Some(chars[i]) {
                chars.drain(i..=i + 1);
                i = i.saturating_sub(1);
            } else {
                i += 1;
            }
        }
        if chars.len() == before {
            return chars.is_empty();
        }
    }
}

fn strings_of_length(len: u32) -> Vec<String> {
    let count = 6_usize.pow(len);
    let mut out = Vec::with_capacity(count);
    for mut n in 0..count {
        let mut s = String::new();
        for _ in 0..len {
            s.push(ALPHABET[n % 6]);
            n /= 6;
        }
        out.push(s);
    }
    out
}

#[test]
fn verdict_matches_pair_reduction_for_short_sequences() {
    for len in 0..=5 {
        for input in strings_of_length(len) {
            assert_eq!(
                validate(&input).is_valid(),
                reduces_to_empty(&input),
                "disagreement on {input:?}"
            );
        }
    }
}
