//! End-to-end generation run
//!
//! Seeds one random source from the config and threads it through sampling
//! and partitioning, so a config always yields the same households.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::GeneratorConfig;
use crate::core::error::Result;
use crate::demographics::sample;
use crate::households::partition;
use crate::network::ContactNetwork;
use crate::output::GenerationOutput;

/// Run sampling, partitioning and network construction for `config`
pub fn generate(config: &GeneratorConfig) -> Result<GenerationOutput> {
    let start = std::time::Instant::now();

    let distribution = config.distribution()?;
    config.household_size_range.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    let demographics = sample(
        &distribution,
        config.household_size_range,
        config.num_households,
        config.adults_per_household,
        &mut rng,
    )?;

    tracing::info!(
        "Sampled {} people for {} households",
        demographics.ages.len(),
        demographics.household_sizes.len()
    );

    let assignment = partition(
        &demographics.ages,
        &demographics.household_sizes,
        config.adults_per_household,
        &mut rng,
    )?;

    let network = ContactNetwork::from_households(&assignment);

    tracing::info!(
        "Built {} households with {} contact edges",
        assignment.households.len(),
        network.edge_count()
    );

    Ok(GenerationOutput::new(config.seed, &assignment, &network, start.elapsed()))
}
