//! Decoded instruction sequences.

use std::ops::Index;

use super::decoder::decode;
use super::instruction::Instruction;

/// An ordered, index-stable sequence of decoded instructions.
///
/// Raw words and decoded instructions stay aligned 1:1; index `i` always
/// names the `i`-th word of the input. A `Program` is never modified after
/// construction. Resolvers produce fresh word sequences instead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    words: Vec<u32>,
    instructions: Vec<Instruction>,
}

impl Program {
    /// Decodes every word of `words` once.
    pub fn decode(words: &[u32]) -> Self {
        words.iter().copied().collect()
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn get(&self, idx: usize) -> Option<&Instruction> {
        self.instructions.get(idx)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }
}

impl FromIterator<u32> for Program {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        let words: Vec<u32> = iter.into_iter().collect();
        let instructions = words.iter().map(|&w| decode(w)).collect();
        Self {
            words,
            instructions,
        }
    }
}

impl Index<usize> for Program {
    type Output = Instruction;

    fn index(&self, idx: usize) -> &Instruction {
        &self.instructions[idx]
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}
