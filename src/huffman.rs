use crate::bits::Bits;
use crate::domain::Domain;
use crate::error::CodecError;
use crate::error::Result;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::collections::HashMap;
use std::sync::LazyLock;

/// A node in the code tree, addressed by its index in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Leaf(char),
    Branch(usize, usize),
}

/// Prefix code for one [`Domain`].
///
/// Construction is deterministic: the heap orders by (weight, index), leaves
/// are indexed in table order and every merged node takes the next index.
/// The lighter of each pair becomes the `0` branch. Encoder and decoder
/// therefore always agree on a domain's code without exchanging it.
#[derive(Debug, Clone)]
pub struct Codebook {
    domain: Domain,
    nodes: Vec<Node>,
    codes: HashMap<char, Bits>,
}

static CODEBOOKS: LazyLock<[Codebook; 6]> = LazyLock::new(|| Domain::all().map(Codebook::from));

impl Codebook {
    /// Shared codebook for `domain`, built on first use.
    pub fn of(domain: Domain) -> &'static Self {
        &CODEBOOKS[domain as usize]
    }
    pub fn domain(&self) -> Domain {
        self.domain
    }
    pub fn code(&self, ch: char) -> Option<&Bits> {
        self.codes.get(&ch)
    }

    /// Concatenated codewords of `text`, no padding.
    pub fn encode(&self, text: &str) -> Result<Bits> {
        let mut bits = Bits::empty();
        for ch in text.chars() {
            match self.codes.get(&ch) {
                Some(code) => bits.extend(code),
                None => {
                    return Err(CodecError::Unencodable {
                        ch,
                        domain: self.domain,
                    });
                }
            }
        }
        log::trace!("{} chars -> {} bits ({})", text.chars().count(), bits.len(), self.domain);
        Ok(bits)
    }

    /// Inverse of [`Codebook::encode`]. Fails if the bits stop partway
    /// through a codeword.
    pub fn decode(&self, bits: &Bits) -> Result<String> {
        let root = self.root();
        let mut text = String::new();
        let mut node = root;
        for bit in bits.iter() {
            node = match self.nodes[node] {
                Node::Branch(zero, _) if !bit => zero,
                Node::Branch(_, one) => one,
                Node::Leaf(_) if bit => return Err(CodecError::Malformed),
                Node::Leaf(_) => root,
            };
            if let Node::Leaf(ch) = self.nodes[node] {
                text.push(ch);
                node = root;
            }
        }
        match node == root {
            true => Ok(text),
            false => Err(CodecError::Malformed),
        }
    }

    fn root(&self) -> usize {
        self.nodes.len() - 1
    }

    /// walk the tree once, recording the path to every leaf
    fn paths(nodes: &[Node]) -> HashMap<char, Bits> {
        let mut codes = HashMap::new();
        let mut stack = vec![(nodes.len() - 1, Bits::empty())];
        while let Some((index, path)) = stack.pop() {
            match nodes[index] {
                Node::Leaf(ch) if path.is_empty() => {
                    codes.insert(ch, Bits::from(vec![false]));
                }
                Node::Leaf(ch) => {
                    codes.insert(ch, path);
                }
                Node::Branch(zero, one) => {
                    let mut left = path.clone();
                    let mut right = path;
                    left.push(false);
                    right.push(true);
                    stack.push((zero, left));
                    stack.push((one, right));
                }
            }
        }
        codes
    }
}

impl From<Domain> for Codebook {
    fn from(domain: Domain) -> Self {
        let table = domain.table();
        let mut nodes = table
            .iter()
            .map(|(ch, _)| Node::Leaf(*ch))
            .collect::<Vec<_>>();
        let mut heap = table
            .iter()
            .enumerate()
            .map(|(i, (_, w))| Reverse((*w as u64, i)))
            .collect::<BinaryHeap<_>>();
        while let (Some(Reverse((w0, i0))), Some(Reverse((w1, i1)))) = (heap.pop(), heap.pop()) {
            heap.push(Reverse((w0 + w1, nodes.len())));
            nodes.push(Node::Branch(i0, i1));
        }
        let codes = Self::paths(&nodes);
        Self {
            domain,
            nodes,
            codes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_character_has_a_code() {
        for domain in Domain::all() {
            let book = Codebook::of(domain);
            for (ch, _) in domain.table() {
                assert!(book.code(*ch).is_some());
            }
        }
    }

    #[test]
    fn codes_are_prefix_free() {
        for domain in Domain::all() {
            let book = Codebook::of(domain);
            let codes = book.codes.values().map(|b| b.to_string()).collect::<Vec<_>>();
            for a in codes.iter() {
                for b in codes.iter().filter(|b| *b != a) {
                    assert!(!b.starts_with(a.as_str()), "{} prefixes {}", a, b);
                }
            }
        }
    }

    #[test]
    fn heavier_symbols_get_shorter_codes() {
        let book = Codebook::of(Domain::Lower);
        let e = book.code('e').unwrap().len();
        let z = book.code('z').unwrap().len();
        assert!(e < z);
    }

    #[test]
    fn construction_is_reproducible() {
        for domain in Domain::all() {
            let a = Codebook::from(domain);
            let b = Codebook::from(domain);
            assert!(a.codes == b.codes);
        }
    }

    #[test]
    fn roundtrip_text() {
        let cases = [
            (Domain::Num, "8675309"),
            (Domain::Lower, "attack at dawn"),
            (Domain::LowerAndUpper, "HelloThere"),
            (Domain::LettersNumbers, "R2D2 C3PO"),
            (Domain::LatLong, "40.7128,N,74.0060,W"),
            (Domain::All, "Hello, World! (x+y)/2 = ~z"),
        ];
        for (domain, text) in cases {
            let book = Codebook::of(domain);
            let bits = book.encode(text).unwrap();
            assert!(book.decode(&bits).unwrap() == text);
        }
    }

    #[test]
    fn encode_rejects_foreign_characters() {
        let err = Codebook::of(Domain::Num).encode("12a").unwrap_err();
        assert!(
            err == CodecError::Unencodable {
                ch: 'a',
                domain: Domain::Num
            }
        );
    }

    #[test]
    fn decode_rejects_truncated_codeword() {
        let book = Codebook::of(Domain::Lower);
        let code = book.code('z').unwrap().to_string();
        let truncated = Bits::try_from(&code[..code.len() - 1]).unwrap();
        assert!(book.decode(&truncated) == Err(CodecError::Malformed));
    }

    #[test]
    fn empty_roundtrip() {
        let book = Codebook::of(Domain::All);
        assert!(book.encode("").unwrap().is_empty());
        assert!(book.decode(&Bits::empty()).unwrap().is_empty());
    }
}
