//! Systematic Reed-Solomon code over GF(2^8)
//!
//! Text is split into blocks of `255 - parity` bytes; every block is followed
//! by `parity` check bytes, so a short text of `n` bytes encodes to `n + parity`
//! bytes. Each block corrects up to `parity / 2` corrupted bytes anywhere in it.
//!
//! The finite-field arithmetic is not implemented here. It is provided by a
//! [`SymbolCodec`] backend; [`GaloisBackend`] wraps the `reed-solomon` crate.

use crate::codec::Codec;
use crate::constants::{DEFAULT_RS_PARITY, MAX_RS_PARITY, RS_BLOCK_SIZE};
use crate::error::EccError;
use crate::types::{Decoded, Diagnostic, Scheme};
use bytes::{BufMut, Bytes, BytesMut};
use core::fmt;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// A block recovered by a [`SymbolCodec`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectedBlock {
    /// Data bytes with the check bytes stripped
    pub data: Vec<u8>,

    /// Number of bytes that differed from the corrected codeword
    pub corrected_symbols: usize,
}

/// Finite-field codec capability: add check symbols, correct corrupted blocks
///
/// Implementations must be systematic: the encoded block starts with the data
/// bytes unchanged, followed by exactly `parity_len()` check bytes.
pub trait SymbolCodec {
    /// Number of check bytes appended to every block
    fn parity_len(&self) -> usize;

    /// Encode one block of at most `255 - parity_len()` data bytes
    fn encode_block(&self, data: &[u8]) -> Vec<u8>;

    /// Correct one received block, or report that it is beyond repair
    fn correct_block(&self, block: &[u8]) -> Result<CorrectedBlock, EccError>;

    /// Maximum number of data bytes per block
    fn max_data_len(&self) -> usize {
        RS_BLOCK_SIZE - self.parity_len()
    }

    /// Number of byte errors a block can absorb
    fn correction_capacity(&self) -> usize {
        self.parity_len() / 2
    }
}

/// [`SymbolCodec`] backed by the `reed-solomon` crate
pub struct GaloisBackend {
    parity: usize,
    encoder: reed_solomon::Encoder,
    decoder: reed_solomon::Decoder,
}

impl GaloisBackend {
    /// Create a backend producing `parity` check bytes per block
    pub fn new(parity: usize) -> Result<Self, EccError> {
        if parity == 0 || parity > MAX_RS_PARITY {
            return Err(EccError::InvalidParity(parity));
        }
        Ok(Self {
            parity,
            encoder: reed_solomon::Encoder::new(parity),
            decoder: reed_solomon::Decoder::new(parity),
        })
    }
}

impl fmt::Debug for GaloisBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaloisBackend")
            .field("parity", &self.parity)
            .finish()
    }
}

impl SymbolCodec for GaloisBackend {
    fn parity_len(&self) -> usize {
        self.parity
    }

    fn encode_block(&self, data: &[u8]) -> Vec<u8> {
        let encoded = self.encoder.encode(data);
        let mut block = Vec::with_capacity(data.len() + self.parity);
        block.extend_from_slice(encoded.data());
        block.extend_from_slice(encoded.ecc());
        block
    }

    fn correct_block(&self, block: &[u8]) -> Result<CorrectedBlock, EccError> {
        if block.len() <= self.parity || block.len() > RS_BLOCK_SIZE {
            return Err(EccError::Uncorrectable(format!(
                "block of {} bytes cannot hold {} check bytes plus data",
                block.len(),
                self.parity
            )));
        }

        let mut received = block.to_vec();
        let recovered = self.decoder.correct(&mut received, None).map_err(|_| {
            EccError::Uncorrectable(format!(
                "too many symbol errors (capacity {} per block)",
                self.correction_capacity()
            ))
        })?;

        let data = recovered.data().to_vec();
        let corrected_symbols = data
            .iter()
            .chain(recovered.ecc().iter())
            .zip(block.iter())
            .filter(|(a, b)| a != b)
            .count();

        Ok(CorrectedBlock {
            data,
            corrected_symbols,
        })
    }
}

/// Outcome of decoding a Reed-Solomon codeword
///
/// Exactly one of `text` and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsDecoded {
    /// The recovered text
    pub text: Option<String>,

    /// Why decoding failed
    pub error: Option<String>,

    /// Bytes repaired across all blocks
    pub corrected_symbols: usize,
}

impl RsDecoded {
    fn failure(error: &EccError) -> Self {
        Self {
            text: None,
            error: Some(error.to_string()),
            corrected_symbols: 0,
        }
    }

    /// True when text was recovered
    pub fn is_ok(&self) -> bool {
        self.text.is_some()
    }
}

/// Reed-Solomon text codec
#[derive(Debug)]
pub struct ReedSolomonCodec<B = GaloisBackend> {
    backend: B,
}

impl ReedSolomonCodec<GaloisBackend> {
    /// Create a codec with `parity` check bytes per block
    pub fn new(parity: usize) -> Result<Self, EccError> {
        Ok(Self::with_backend(GaloisBackend::new(parity)?))
    }
}

impl Default for ReedSolomonCodec<GaloisBackend> {
    fn default() -> Self {
        Self::with_backend(GaloisBackend {
            parity: DEFAULT_RS_PARITY,
            encoder: reed_solomon::Encoder::new(DEFAULT_RS_PARITY),
            decoder: reed_solomon::Decoder::new(DEFAULT_RS_PARITY),
        })
    }
}

impl<B: SymbolCodec> ReedSolomonCodec<B> {
    /// Create a codec around any finite-field backend
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Check bytes per block
    pub fn parity_len(&self) -> usize {
        self.backend.parity_len()
    }

    /// Byte errors each block can correct
    pub fn correction_capacity(&self) -> usize {
        self.backend.correction_capacity()
    }

    /// Length of the codeword produced for `data_len` input bytes
    pub fn encoded_len(&self, data_len: usize) -> usize {
        let blocks = data_len.div_ceil(self.backend.max_data_len());
        data_len + blocks * self.backend.parity_len()
    }

    /// Encode UTF-8 text
    pub fn encode(&self, text: &str) -> Result<Bytes, EccError> {
        self.encode_bytes(text.as_bytes())
    }

    /// Encode raw bytes, block by block
    pub fn encode_bytes(&self, data: &[u8]) -> Result<Bytes, EccError> {
        if data.is_empty() {
            return Err(EccError::EmptyInput);
        }

        let mut out = BytesMut::with_capacity(self.encoded_len(data.len()));
        for chunk in data.chunks(self.backend.max_data_len()) {
            out.put_slice(&self.backend.encode_block(chunk));
        }

        #[cfg(feature = "logging")]
        debug!(
            "Reed-Solomon encoded {} bytes into {} bytes ({} parity per block)",
            data.len(),
            out.len(),
            self.backend.parity_len()
        );

        Ok(out.freeze())
    }

    /// Correct and strip the check bytes, returning the repaired data and repair count
    pub fn decode_bytes(&self, received: &[u8]) -> Result<(Vec<u8>, usize), EccError> {
        if received.is_empty() {
            return Err(EccError::EmptyInput);
        }

        let mut data = Vec::with_capacity(received.len());
        let mut corrected = 0;
        for (index, block) in received.chunks(RS_BLOCK_SIZE).enumerate() {
            let recovered = self.backend.correct_block(block).map_err(|e| match e {
                EccError::Uncorrectable(msg) => {
                    EccError::Uncorrectable(format!("block {}: {}", index, msg))
                }
                other => other,
            })?;
            corrected += recovered.corrected_symbols;
            data.extend_from_slice(&recovered.data);
        }
        Ok((data, corrected))
    }

    /// Decode a possibly corrupted codeword back into text
    ///
    /// Never fails: capacity overruns and non-UTF-8 results are reported in
    /// [`RsDecoded::error`].
    pub fn decode(&self, received: &[u8]) -> RsDecoded {
        let (data, corrected_symbols) = match self.decode_bytes(received) {
            Ok(ok) => ok,
            Err(e) => {
                #[cfg(feature = "logging")]
                warn!("Reed-Solomon decode failed: {}", e);
                return RsDecoded::failure(&e);
            }
        };

        match String::from_utf8(data) {
            Ok(text) => RsDecoded {
                text: Some(text),
                error: None,
                corrected_symbols,
            },
            Err(e) => RsDecoded::failure(&EccError::Uncorrectable(format!(
                "decoded bytes are not valid UTF-8: {}",
                e
            ))),
        }
    }
}

impl<B: SymbolCodec> Codec for ReedSolomonCodec<B> {
    type Input = String;
    type Encoded = Bytes;

    fn scheme(&self) -> Scheme {
        Scheme::ReedSolomon
    }

    fn parse_input(&self, raw: &str) -> Result<String, EccError> {
        if raw.is_empty() {
            return Err(EccError::EmptyInput);
        }
        Ok(raw.to_string())
    }

    fn encode(&self, input: &String) -> Result<Bytes, EccError> {
        ReedSolomonCodec::encode(self, input)
    }

    fn decode(&self, received: &Bytes) -> Result<Decoded<String>, EccError> {
        let decoded = ReedSolomonCodec::decode(self, received);
        Ok(match (decoded.text, decoded.error) {
            (Some(text), _) => Decoded::recovered(
                text,
                Diagnostic::CorrectedSymbols {
                    count: decoded.corrected_symbols,
                },
            ),
            (None, error) => {
                Decoded::failed(error.unwrap_or_else(|| "decoding failed".to_string()))
            }
        })
    }

    fn render(&self, encoded: &Bytes) -> String {
        format!("{:?}", encoded)
    }
}
