//! Rate 1/2, constraint length 3 convolutional code with hard-decision Viterbi decoding
//!
//! Generators are G1 = 111 and G2 = 101. The encoder state is the last two input
//! bits, most recent first, so state `10` means "last bit 1, the one before 0".
//! States are indexed 0..4 in the order `00`, `01`, `10`, `11`.
//!
//! # Tie-breaking
//!
//! The decoder visits states in index order and input bits 0 before 1. A
//! destination state only replaces its survivor on a strictly smaller metric,
//! so among equal-metric candidates the first one visited is kept. The final
//! state is chosen the same way: the lowest index among the minimum metrics.

use crate::bits::BitString;
use crate::codec::Codec;
use crate::constants::{CONV_G1, CONV_G2, CONV_NUM_STATES, CONV_OUTPUTS_PER_INPUT};
use crate::error::EccError;
use crate::types::{Decoded, Diagnostic, Scheme};

#[cfg(feature = "logging")]
use tracing::debug;

/// One edge of the trellis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State index after consuming the input bit
    pub next_state: usize,

    /// The two encoder output bits (G1, G2)
    pub output: [bool; 2],
}

/// Full state machine, indexed by `[state][input bit]`
pub const TRANSITIONS: [[Transition; 2]; CONV_NUM_STATES] = build_transitions();

const fn parity(x: u8) -> bool {
    x.count_ones() % 2 == 1
}

const fn transition(state: usize, input: usize) -> Transition {
    // Shift register with the newest bit in the MSB: [input, s_recent, s_older]
    let register = ((input << 2) | state) as u8;
    Transition {
        next_state: (input << 1) | (state >> 1),
        output: [parity(register & CONV_G1), parity(register & CONV_G2)],
    }
}

const fn build_transitions() -> [[Transition; 2]; CONV_NUM_STATES] {
    let mut table = [[Transition {
        next_state: 0,
        output: [false, false],
    }; 2]; CONV_NUM_STATES];
    let mut state = 0;
    while state < CONV_NUM_STATES {
        table[state][0] = transition(state, 0);
        table[state][1] = transition(state, 1);
        state += 1;
    }
    table
}

/// Render a state index the way the trellis diagrams do (`"10"`)
pub fn state_label(state: usize) -> String {
    format!("{:02b}", state)
}

/// Streaming convolutional encoder
#[derive(Debug, Clone, Default)]
pub struct ConvolutionalEncoder {
    state: usize,
}

impl ConvolutionalEncoder {
    /// Create an encoder in the all-zero state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state index
    pub fn state(&self) -> usize {
        self.state
    }

    /// Shift in one bit and return the two output bits
    pub fn push(&mut self, bit: bool) -> [bool; 2] {
        let t = TRANSITIONS[self.state][usize::from(bit)];
        self.state = t.next_state;
        t.output
    }

    /// Encode a block of bits, continuing from the current state
    pub fn push_block(&mut self, bits: &BitString) -> BitString {
        bits.iter().flat_map(|b| self.push(b)).collect()
    }

    /// Return to the all-zero state
    pub fn reset(&mut self) {
        self.state = 0;
    }
}

/// Encode a non-empty bit string from the all-zero state
pub fn encode(bits: &BitString) -> Result<BitString, EccError> {
    if bits.is_empty() {
        return Err(EccError::EmptyInput);
    }
    Ok(ConvolutionalEncoder::new().push_block(bits))
}

/// Survivor pointer for one state at one time step
#[derive(Debug, Clone, Copy)]
struct Survivor {
    prev_state: usize,
    input: bool,
}

/// Hard-decision Viterbi decoder over the 4-state trellis
#[derive(Debug, Clone, Default)]
pub struct ViterbiDecoder;

/// Output of a Viterbi search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViterbiPath {
    /// Most likely input sequence
    pub bits: BitString,

    /// Total Hamming distance between the received sequence and the re-encoded path
    pub metric: u32,

    /// State index the winning path ends in
    pub final_state: usize,
}

impl ViterbiDecoder {
    /// Create a decoder
    pub fn new() -> Self {
        Self
    }

    /// Find the input sequence whose encoding is closest to `received`
    pub fn decode(&self, received: &BitString) -> Result<ViterbiPath, EccError> {
        if received.is_empty() {
            return Err(EccError::EmptyInput);
        }
        if received.len() % CONV_OUTPUTS_PER_INPUT != 0 {
            return Err(EccError::OddLength(received.len()));
        }

        let steps = received.len() / CONV_OUTPUTS_PER_INPUT;

        // None marks a state no path has reached yet
        let mut metrics: [Option<u32>; CONV_NUM_STATES] = [None; CONV_NUM_STATES];
        metrics[0] = Some(0);
        let mut history: Vec<[Option<Survivor>; CONV_NUM_STATES]> = Vec::with_capacity(steps);

        for step in 0..steps {
            let segment = [
                received.bit(step * CONV_OUTPUTS_PER_INPUT),
                received.bit(step * CONV_OUTPUTS_PER_INPUT + 1),
            ];
            let mut next_metrics: [Option<u32>; CONV_NUM_STATES] = [None; CONV_NUM_STATES];
            let mut survivors: [Option<Survivor>; CONV_NUM_STATES] = [None; CONV_NUM_STATES];

            for (state, metric) in metrics.iter().enumerate() {
                let Some(metric) = *metric else {
                    continue;
                };
                for input in [false, true] {
                    let t = TRANSITIONS[state][usize::from(input)];
                    let candidate = metric + branch_distance(segment, t.output);
                    let better = match next_metrics[t.next_state] {
                        Some(current) => candidate < current,
                        None => true,
                    };
                    if better {
                        next_metrics[t.next_state] = Some(candidate);
                        survivors[t.next_state] = Some(Survivor {
                            prev_state: state,
                            input,
                        });
                    }
                }
            }

            metrics = next_metrics;
            history.push(survivors);
        }

        let (final_state, metric) = best_state(&metrics);
        let bits = traceback(&history, final_state);

        #[cfg(feature = "logging")]
        debug!(
            "Viterbi decoded {} segments, final state {}, path metric {}",
            steps,
            state_label(final_state),
            metric
        );

        Ok(ViterbiPath {
            bits,
            metric,
            final_state,
        })
    }
}

/// Decode a received sequence and return only the recovered bits
pub fn decode(received: &BitString) -> Result<BitString, EccError> {
    Ok(ViterbiDecoder::new().decode(received)?.bits)
}

/// [`Codec`] adapter for the convolutional code
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvolutionalCodec;

impl Codec for ConvolutionalCodec {
    type Input = BitString;
    type Encoded = BitString;

    fn scheme(&self) -> Scheme {
        Scheme::Convolutional
    }

    fn parse_input(&self, raw: &str) -> Result<BitString, EccError> {
        let bits = BitString::parse(raw)?;
        if bits.is_empty() {
            return Err(EccError::EmptyInput);
        }
        Ok(bits)
    }

    fn encode(&self, input: &BitString) -> Result<BitString, EccError> {
        encode(input)
    }

    fn decode(&self, received: &BitString) -> Result<Decoded<BitString>, EccError> {
        let path = ViterbiDecoder::new().decode(received)?;
        Ok(Decoded::recovered(
            path.bits,
            Diagnostic::PathMetric {
                metric: path.metric,
            },
        ))
    }

    fn render(&self, encoded: &BitString) -> String {
        encoded.to_string()
    }
}

fn branch_distance(segment: [bool; 2], expected: [bool; 2]) -> u32 {
    u32::from(segment[0] != expected[0]) + u32::from(segment[1] != expected[1])
}

/// Lowest metric, ties to the lowest state index
fn best_state(metrics: &[Option<u32>; CONV_NUM_STATES]) -> (usize, u32) {
    let mut best = (0, u32::MAX);
    for (state, metric) in metrics.iter().enumerate() {
        if let Some(m) = *metric {
            if m < best.1 {
                best = (state, m);
            }
        }
    }
    best
}

fn traceback(history: &[[Option<Survivor>; CONV_NUM_STATES]], final_state: usize) -> BitString {
    let mut reversed = Vec::with_capacity(history.len());
    let mut state = final_state;
    for survivors in history.iter().rev() {
        // Every state reached at step t has a survivor recorded at step t
        match survivors[state] {
            Some(s) => {
                reversed.push(s.input);
                state = s.prev_state;
            }
            None => break,
        }
    }
    reversed.into_iter().rev().collect()
}
