/*! Integration tests for array_object.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - array: ArrayObject operations, grouped by sorting, stack operations,
 *   cursor navigation, queries, the mutation hook and serialization
 * - value: the dynamic Value type, keys and the comparison modes
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("array_object=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod array;
mod helpers;
