//! Trial orchestration: encode, corrupt, decode, compare, record
//!
//! [`run_trial`] is the single path every scheme goes through. [`Studio`]
//! bundles the three codecs with a [`StatsTracker`] and adds the multi-scheme
//! workflows: side-by-side comparison, battle mode and recommendations.

use crate::bits::BitString;
use crate::codec::Codec;
use crate::config::{BattleSettings, StudioConfig};
use crate::constants::{HAMMING_DATA_BITS, HIGH_CORRECTION_RATE};
use crate::convolutional::ConvolutionalCodec;
use crate::error::EccError;
use crate::hamming::HammingCodec;
use crate::noise::{inject_noise, Corruptible, NoiseKind, NoiseModel};
use crate::reed_solomon::ReedSolomonCodec;
use crate::stats::StatsTracker;
use crate::types::{Decoded, Diagnostic, Scheme};
use core::fmt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::thread;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// How to choose the noise for a trial
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoisePlan {
    /// Use exactly this model
    Fixed(NoiseModel),

    /// Pick the intensity from the codeword length
    Adaptive(NoiseKind),
}

impl NoisePlan {
    /// Concrete model for a codeword of `codeword_len` positions
    pub fn resolve(&self, codeword_len: usize) -> NoiseModel {
        match *self {
            NoisePlan::Fixed(model) => model,
            NoisePlan::Adaptive(kind) => NoiseModel::adaptive(kind, codeword_len),
        }
    }
}

impl From<NoiseModel> for NoisePlan {
    fn from(model: NoiseModel) -> Self {
        NoisePlan::Fixed(model)
    }
}

impl From<NoiseKind> for NoisePlan {
    fn from(kind: NoiseKind) -> Self {
        NoisePlan::Adaptive(kind)
    }
}

/// What kind of data the user typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Exactly four binary digits
    Nibble(BitString),

    /// Any other binary string
    Bits(BitString),

    /// Anything containing a non-binary character
    Text(String),
}

impl Payload {
    /// Classify raw input
    pub fn classify(raw: &str) -> Result<Self, EccError> {
        if raw.is_empty() {
            return Err(EccError::EmptyInput);
        }
        if BitString::is_binary(raw) {
            let bits = BitString::parse(raw)?;
            if bits.len() == HAMMING_DATA_BITS {
                Ok(Payload::Nibble(bits))
            } else {
                Ok(Payload::Bits(bits))
            }
        } else {
            Ok(Payload::Text(raw.to_string()))
        }
    }

    /// Why `scheme` cannot run on this payload, or `None` if it can
    pub fn skip_reason(&self, scheme: Scheme) -> Option<&'static str> {
        match (self, scheme) {
            (Payload::Nibble(_), Scheme::Hamming) => None,
            (_, Scheme::Hamming) => Some("needs exactly 4 binary digits"),
            (Payload::Text(_), Scheme::Convolutional) => Some("needs binary input"),
            (_, Scheme::Convolutional) => None,
            (Payload::Text(_), Scheme::ReedSolomon) => None,
            (_, Scheme::ReedSolomon) => Some("binary input"),
        }
    }

    /// True if `scheme` can run on this payload
    pub fn supports(&self, scheme: Scheme) -> bool {
        self.skip_reason(scheme).is_none()
    }

    /// Schemes that can run on this payload, in display order
    pub fn applicable_schemes(&self) -> Vec<Scheme> {
        Scheme::ALL
            .into_iter()
            .filter(|&s| self.supports(s))
            .collect()
    }
}

/// Everything observed during one trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialReport {
    /// Scheme that ran
    pub scheme: Scheme,

    /// Noise that was applied
    pub noise: NoiseModel,

    /// Original input
    pub input: String,

    /// Clean codeword
    pub encoded: String,

    /// Codeword after noise
    pub noisy: String,

    /// Positions the noise actually changed
    pub injected_errors: usize,

    /// Decoder output, absent when the decoder gave up
    pub decoded: Option<String>,

    /// Scheme-specific decode detail
    pub diagnostic: Diagnostic,

    /// Decoded output equals the input
    pub success: bool,
}

impl TrialReport {
    /// One-line verdict
    pub fn status(&self) -> &'static str {
        if self.success {
            "Recovered Correctly"
        } else {
            "Decoding Failed"
        }
    }
}

fn banner(scheme: Scheme) -> &'static str {
    match scheme {
        Scheme::Hamming => "HAMMING CODE",
        Scheme::Convolutional => "CONVOLUTIONAL CODE",
        Scheme::ReedSolomon => "REED-SOLOMON",
    }
}

impl fmt::Display for TrialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", banner(self.scheme))?;
        writeln!(f, "Input:              {}", self.input)?;
        writeln!(f, "Encoded:            {}", self.encoded)?;
        writeln!(f, "Noise:              {}", self.noise)?;
        writeln!(f, "Noisy Encoded:      {}", self.noisy)?;
        writeln!(f, "Errors Injected:    {}", self.injected_errors)?;
        writeln!(
            f,
            "Decoded:            {}",
            self.decoded.as_deref().unwrap_or("Decoding Failed")
        )?;
        writeln!(f, "{}", self.diagnostic)?;
        write!(f, "Status:             {}", self.status())
    }
}

/// Encode `input`, corrupt it, decode it and record the outcome
///
/// A decoder that rejects the noisy codeword counts as a failed trial rather
/// than an error; only invalid input or noise parameters return `Err`.
pub fn run_trial<C, R>(
    codec: &C,
    input: &C::Input,
    plan: &NoisePlan,
    rng: &mut R,
    stats: &StatsTracker,
) -> Result<TrialReport, EccError>
where
    C: Codec,
    R: Rng + ?Sized,
{
    let encoded = codec.encode(input)?;
    let noise = plan.resolve(encoded.symbol_count());
    let noisy = inject_noise(&encoded, &noise, rng)?;
    let injected_errors = encoded.differing_positions(&noisy).len();

    let decoded = match codec.decode(&noisy) {
        Ok(decoded) => decoded,
        Err(e) => {
            #[cfg(feature = "logging")]
            warn!("{} decoder rejected codeword: {}", codec.scheme(), e);
            Decoded::failed(e.to_string())
        }
    };
    let success = decoded.matches(input);
    stats.record(codec.scheme(), success);

    #[cfg(feature = "logging")]
    debug!(
        "{} trial with {}: {} errors injected, success = {}",
        codec.scheme(),
        noise,
        injected_errors,
        success
    );

    Ok(TrialReport {
        scheme: codec.scheme(),
        noise,
        input: input.to_string(),
        encoded: codec.render(&encoded),
        noisy: codec.render(&noisy),
        injected_errors,
        decoded: decoded.value.map(|v| v.to_string()),
        diagnostic: decoded.diagnostic,
        success,
    })
}

/// One instance of every codec
#[derive(Debug)]
struct Codecs {
    hamming: HammingCodec,
    convolutional: ConvolutionalCodec,
    reed_solomon: ReedSolomonCodec,
}

impl Codecs {
    fn new(rs_parity: usize) -> Result<Self, EccError> {
        Ok(Self {
            hamming: HammingCodec,
            convolutional: ConvolutionalCodec,
            reed_solomon: ReedSolomonCodec::new(rs_parity)?,
        })
    }

    fn run<R: Rng + ?Sized>(
        &self,
        scheme: Scheme,
        raw: &str,
        plan: &NoisePlan,
        rng: &mut R,
        stats: &StatsTracker,
    ) -> Result<TrialReport, EccError> {
        match scheme {
            Scheme::Hamming => {
                let input = self.hamming.parse_input(raw)?;
                run_trial(&self.hamming, &input, plan, rng, stats)
            }
            Scheme::Convolutional => {
                let input = self.convolutional.parse_input(raw)?;
                run_trial(&self.convolutional, &input, plan, rng, stats)
            }
            Scheme::ReedSolomon => {
                let input = self.reed_solomon.parse_input(raw)?;
                run_trial(&self.reed_solomon, &input, plan, rng, stats)
            }
        }
    }
}

/// Result of running every applicable scheme on one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// The shared input
    pub input: String,

    /// One row per scheme, in display order
    pub rows: Vec<ComparisonRow>,
}

/// One scheme's line in a [`Comparison`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Scheme the row is about
    pub scheme: Scheme,

    /// What happened
    pub outcome: ComparisonOutcome,
}

/// Whether a scheme ran in a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ComparisonOutcome {
    /// The scheme ran
    Ran {
        /// Full trial details
        report: Box<TrialReport>,
    },

    /// The input does not suit the scheme
    Skipped {
        /// Why it was skipped
        reason: String,
    },
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[COMPARISON MODE]")?;
        writeln!(f)?;
        for row in &self.rows {
            match &row.outcome {
                ComparisonOutcome::Ran { report } => {
                    writeln!(f, "{} Code: {}", row.scheme, report.status())?
                }
                ComparisonOutcome::Skipped { reason } => {
                    writeln!(f, "{} Code: Skipped ({})", row.scheme, reason)?
                }
            }
        }
        Ok(())
    }
}

/// Per-scheme tally from battle mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleScore {
    /// Scheme the tally belongs to
    pub scheme: Scheme,

    /// Rounds in which this scheme ran
    pub trials: u64,

    /// Rounds in which it recovered the input
    pub successes: u64,

    /// Successes over all rounds, in percent
    pub accuracy: f64,

    /// Successes over the rounds it actually ran, in percent
    pub success_rate: f64,
}

/// Outcome of a battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleReport {
    /// Rounds played
    pub rounds: usize,

    /// Noise family used
    pub noise: NoiseKind,

    /// One score per scheme, in display order
    pub scores: Vec<BattleScore>,
}

impl BattleReport {
    /// Score for one scheme
    pub fn score(&self, scheme: Scheme) -> Option<&BattleScore> {
        self.scores.iter().find(|s| s.scheme == scheme)
    }
}

impl fmt::Display for BattleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ECC Battle Mode Results ({} rounds, {})", self.rounds, self.noise)?;
        writeln!(f)?;
        for score in &self.scores {
            let label = format!("{} Code Accuracy:", score.scheme);
            writeln!(
                f,
                "{:<29}{:>6.2}%  ({}/{} trials)",
                label, score.accuracy, score.successes, score.trials
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    trials: [u64; 3],
    successes: [u64; 3],
}

impl Tally {
    fn slot(scheme: Scheme) -> usize {
        match scheme {
            Scheme::Hamming => 0,
            Scheme::Convolutional => 1,
            Scheme::ReedSolomon => 2,
        }
    }

    fn add(&mut self, scheme: Scheme, success: bool) {
        let slot = Self::slot(scheme);
        self.trials[slot] += 1;
        if success {
            self.successes[slot] += 1;
        }
    }

    fn merge(&mut self, other: &Tally) {
        for i in 0..3 {
            self.trials[i] += other.trials[i];
            self.successes[i] += other.successes[i];
        }
    }
}

/// Recommended scheme for an input, with the reasoning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Suggested scheme
    pub scheme: Scheme,

    /// Why
    pub reason: String,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recommended ECC: {} Code", self.scheme)?;
        writeln!(f)?;
        write!(f, "Reason: {}", self.reason)
    }
}

/// Suggest a scheme from the shape of the input and the results so far
///
/// Short binary input (up to 4 bits) goes to Hamming, longer binary input to
/// the convolutional code, and text to Reed-Solomon.
pub fn recommend(raw: &str, stats: &StatsTracker) -> Result<Recommendation, EccError> {
    if raw.is_empty() {
        return Err(EccError::EmptyInput);
    }

    let (scheme, mut reason) = if BitString::is_binary(raw) {
        if raw.len() <= HAMMING_DATA_BITS {
            (
                Scheme::Hamming,
                "Short binary input (<= 4 bits) is best handled by Hamming.".to_string(),
            )
        } else {
            (
                Scheme::Convolutional,
                "Long binary input is better suited to Convolutional codes.".to_string(),
            )
        }
    } else {
        (
            Scheme::ReedSolomon,
            "Text input is best protected by Reed-Solomon codes.".to_string(),
        )
    };

    let total = stats.snapshot().total();
    if total.tested > 0 && total.success_rate() > HIGH_CORRECTION_RATE {
        reason.push_str(&format!(
            "\nNote: High correction rate so far ({:.1}%).",
            total.success_rate()
        ));
    }

    Ok(Recommendation { scheme, reason })
}

/// The three codecs plus shared statistics
#[derive(Debug)]
pub struct Studio {
    config: StudioConfig,
    codecs: Codecs,
    stats: StatsTracker,
}

impl Studio {
    /// Build a studio from a validated configuration
    pub fn new(config: StudioConfig) -> Result<Self, EccError> {
        config.validate()?;
        let codecs = Codecs::new(config.rs_parity)?;
        Ok(Self {
            config,
            codecs,
            stats: StatsTracker::new(),
        })
    }

    /// Active configuration
    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// Statistics accumulated by every trial run through this studio
    pub fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    /// Run one scheme on raw input
    pub fn run<R: Rng + ?Sized>(
        &self,
        scheme: Scheme,
        raw: &str,
        plan: &NoisePlan,
        rng: &mut R,
    ) -> Result<TrialReport, EccError> {
        self.codecs.run(scheme, raw, plan, rng, &self.stats)
    }

    /// Run every scheme the input suits, listing the others as skipped
    pub fn compare_all<R: Rng + ?Sized>(
        &self,
        raw: &str,
        plan: &NoisePlan,
        rng: &mut R,
    ) -> Result<Comparison, EccError> {
        let payload = Payload::classify(raw)?;
        let mut rows = Vec::with_capacity(Scheme::ALL.len());
        for scheme in Scheme::ALL {
            let outcome = match payload.skip_reason(scheme) {
                Some(reason) => ComparisonOutcome::Skipped {
                    reason: reason.to_string(),
                },
                None => ComparisonOutcome::Ran {
                    report: Box::new(self.run(scheme, raw, plan, rng)?),
                },
            };
            rows.push(ComparisonRow { scheme, outcome });
        }
        Ok(Comparison {
            input: raw.to_string(),
            rows,
        })
    }

    /// Recommend a scheme using this studio's statistics
    pub fn recommend(&self, raw: &str) -> Result<Recommendation, EccError> {
        recommend(raw, &self.stats)
    }

    /// Play `settings.rounds` rounds of random samples against every applicable scheme
    ///
    /// Rounds are split across `settings.workers` threads. Each worker draws
    /// from its own generator seeded from `rng`, so a seeded `rng` gives a
    /// reproducible report. `on_round` is called once per finished round.
    pub fn battle<R: Rng + ?Sized>(
        &self,
        settings: &BattleSettings,
        noise: NoiseKind,
        rng: &mut R,
        on_round: &(dyn Fn() + Sync),
    ) -> Result<BattleReport, EccError> {
        settings.validate()?;

        let workers = settings.workers.min(settings.rounds);
        let seeds: Vec<u64> = (0..workers).map(|_| rng.gen()).collect();
        let plan = NoisePlan::Adaptive(noise);
        let parity = self.config.rs_parity;
        let stats = &self.stats;

        #[cfg(feature = "logging")]
        debug!(
            "Battle: {} rounds of {} on {} worker(s)",
            settings.rounds, noise, workers
        );

        let results: Vec<Result<Tally, EccError>> = thread::scope(|scope| {
            let handles: Vec<_> = seeds
                .iter()
                .enumerate()
                .map(|(w, &seed)| {
                    let rounds = settings.rounds / workers + usize::from(w < settings.rounds % workers);
                    let plan = &plan;
                    scope.spawn(move || -> Result<Tally, EccError> {
                        let codecs = Codecs::new(parity)?;
                        let mut rng = StdRng::seed_from_u64(seed);
                        let mut tally = Tally::default();
                        for _ in 0..rounds {
                            let sample = &settings.samples[rng.gen_range(0..settings.samples.len())];
                            let payload = Payload::classify(sample)?;
                            for scheme in payload.applicable_schemes() {
                                let report = codecs.run(scheme, sample, plan, &mut rng, stats)?;
                                tally.add(scheme, report.success);
                            }
                            on_round();
                        }
                        Ok(tally)
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                .collect()
        });

        let mut total = Tally::default();
        for result in results {
            total.merge(&result?);
        }

        let scores = Scheme::ALL
            .into_iter()
            .map(|scheme| {
                let slot = Tally::slot(scheme);
                let trials = total.trials[slot];
                let successes = total.successes[slot];
                BattleScore {
                    scheme,
                    trials,
                    successes,
                    accuracy: successes as f64 / settings.rounds as f64 * 100.0,
                    success_rate: if trials == 0 {
                        0.0
                    } else {
                        successes as f64 / trials as f64 * 100.0
                    },
                }
            })
            .collect();

        Ok(BattleReport {
            rounds: settings.rounds,
            noise,
            scores,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn studio() -> Studio {
        Studio::new(StudioConfig::default()).unwrap()
    }

    #[test]
    fn test_classify() {
        assert!(matches!(Payload::classify("1010").unwrap(), Payload::Nibble(_)));
        assert!(matches!(Payload::classify("10101").unwrap(), Payload::Bits(_)));
        assert!(matches!(Payload::classify("hello").unwrap(), Payload::Text(_)));
        assert_eq!(Payload::classify("").unwrap_err(), EccError::EmptyInput);
    }

    #[test]
    fn test_applicable_schemes() {
        let nibble = Payload::classify("1010").unwrap();
        assert_eq!(
            nibble.applicable_schemes(),
            vec![Scheme::Hamming, Scheme::Convolutional]
        );
        let text = Payload::classify("hi there").unwrap();
        assert_eq!(text.applicable_schemes(), vec![Scheme::ReedSolomon]);
        assert_eq!(text.skip_reason(Scheme::Convolutional), Some("needs binary input"));
    }

    #[test]
    fn test_single_flip_hamming_trial_succeeds() {
        let studio = studio();
        let mut rng = StdRng::seed_from_u64(1);
        let report = studio
            .run(
                Scheme::Hamming,
                "1011",
                &NoiseModel::SingleFlip { index: 6 }.into(),
                &mut rng,
            )
            .unwrap();
        assert!(report.success);
        assert_eq!(report.encoded, "0110011");
        assert_eq!(report.noisy, "0110010");
        assert_eq!(report.injected_errors, 1);
        assert_eq!(report.diagnostic, Diagnostic::ErrorPosition { position: 7 });
        assert_eq!(studio.stats().success_rate(Scheme::Hamming), 100.0);
    }

    #[test]
    fn test_failed_trial_is_recorded() {
        let studio = studio();
        let mut rng = StdRng::seed_from_u64(2);
        let report = studio
            .run(
                Scheme::Hamming,
                "1011",
                &NoiseModel::RandomFlip { count: 2 }.into(),
                &mut rng,
            )
            .unwrap();
        // Two flips always defeat a distance-3 code
        assert!(!report.success);
        assert_eq!(report.status(), "Decoding Failed");
        assert_eq!(studio.stats().entry(Scheme::Hamming).tested, 1);
        assert_eq!(studio.stats().entry(Scheme::Hamming).corrected, 0);
    }

    #[test]
    fn test_invalid_input_is_not_recorded() {
        let studio = studio();
        let mut rng = StdRng::seed_from_u64(3);
        let plan = NoisePlan::Adaptive(NoiseKind::Random);
        assert!(studio.run(Scheme::Hamming, "10", &plan, &mut rng).is_err());
        assert!(studio
            .run(Scheme::Convolutional, "10x", &plan, &mut rng)
            .is_err());
        assert_eq!(studio.stats().snapshot().total().tested, 0);
    }

    #[test]
    fn test_reed_solomon_trial_report() {
        let studio = studio();
        let mut rng = StdRng::seed_from_u64(4);
        let report = studio
            .run(
                Scheme::ReedSolomon,
                "hello",
                &NoiseModel::RandomFlip { count: 3 }.into(),
                &mut rng,
            )
            .unwrap();
        assert!(report.success);
        assert_eq!(report.decoded.as_deref(), Some("hello"));
        assert_eq!(report.diagnostic, Diagnostic::CorrectedSymbols { count: 3 });
        assert!(report.to_string().starts_with("[REED-SOLOMON]"));
    }

    #[test]
    fn test_compare_all_binary() {
        let studio = studio();
        let mut rng = StdRng::seed_from_u64(5);
        let cmp = studio
            .compare_all("0110", &NoisePlan::Adaptive(NoiseKind::Random), &mut rng)
            .unwrap();
        assert_eq!(cmp.rows.len(), 3);
        assert!(matches!(cmp.rows[0].outcome, ComparisonOutcome::Ran { .. }));
        assert!(matches!(cmp.rows[1].outcome, ComparisonOutcome::Ran { .. }));
        assert_eq!(
            cmp.rows[2].outcome,
            ComparisonOutcome::Skipped {
                reason: "binary input".into()
            }
        );
        assert!(cmp.to_string().contains("Reed-Solomon Code: Skipped (binary input)"));
    }

    #[test]
    fn test_recommend() {
        let stats = StatsTracker::new();
        assert_eq!(recommend("101", &stats).unwrap().scheme, Scheme::Hamming);
        assert_eq!(
            recommend("101101", &stats).unwrap().scheme,
            Scheme::Convolutional
        );
        let rec = recommend("hello", &stats).unwrap();
        assert_eq!(rec.scheme, Scheme::ReedSolomon);
        assert!(!rec.reason.contains("Note"));

        for _ in 0..9 {
            stats.record(Scheme::Hamming, true);
        }
        stats.record(Scheme::Hamming, false);
        let rec = recommend("hello", &stats).unwrap();
        assert!(rec.reason.contains("High correction rate so far (90.0%)"));

        assert!(recommend("", &stats).is_err());
    }

    #[test]
    fn test_battle_counts_rounds_and_trials() {
        let studio = studio();
        let settings = BattleSettings {
            rounds: 40,
            samples: vec!["1101".into(), "hello".into()],
            workers: 3,
        };
        let rounds_seen = AtomicUsize::new(0);
        let mut rng = StdRng::seed_from_u64(6);
        let report = studio
            .battle(&settings, NoiseKind::Random, &mut rng, &|| {
                rounds_seen.fetch_add(1, Ordering::Relaxed);
            })
            .unwrap();

        assert_eq!(rounds_seen.load(Ordering::Relaxed), 40);
        assert_eq!(report.rounds, 40);

        let hamming = report.score(Scheme::Hamming).unwrap();
        let conv = report.score(Scheme::Convolutional).unwrap();
        let rs = report.score(Scheme::ReedSolomon).unwrap();
        // Binary samples run Hamming and convolutional; text runs Reed-Solomon
        assert_eq!(hamming.trials, conv.trials);
        assert_eq!(hamming.trials + rs.trials, 40);
        // One flip never beats Hamming and two bytes never beat RS(10)
        assert_eq!(hamming.successes, hamming.trials);
        assert_eq!(rs.successes, rs.trials);

        let total = studio.stats().snapshot().total();
        assert_eq!(total.tested, hamming.trials + conv.trials + rs.trials);
    }

    #[test]
    fn test_battle_is_reproducible() {
        let settings = BattleSettings {
            rounds: 30,
            workers: 2,
            ..Default::default()
        };
        let run = || {
            let studio = studio();
            let mut rng = StdRng::seed_from_u64(99);
            studio
                .battle(&settings, NoiseKind::Gaussian, &mut rng, &|| {})
                .unwrap()
        };
        assert_eq!(run(), run());
    }
}
