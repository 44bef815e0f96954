// crates/guidfmt-core/tests/proptest_encoder.rs
// ============================================================================
// Module: Encoder Property-Based Tests
// Description: Property tests for GUID rendering across arbitrary inputs.
// Purpose: Detect permutation, length, and bounds regressions over wide input ranges.
// ============================================================================

//! Property-based tests for encoder invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

mod support;

use guidfmt_core::EncodeError;
use guidfmt_core::Guid;
use guidfmt_core::GuidLayout;
use guidfmt_core::OutputEncoding;
use guidfmt_core::encode;
use guidfmt_core::encode_with;
use proptest::prelude::*;
use support::stored_bytes_from_text;

fn layout_strategy() -> impl Strategy<Value = GuidLayout> {
    prop::sample::select(GuidLayout::ALL.to_vec())
}

fn encoding_strategy() -> impl Strategy<Value = OutputEncoding> {
    prop_oneof![Just(OutputEncoding::Utf8), Just(OutputEncoding::Utf16Le)]
}

proptest! {
    #[test]
    fn rendering_round_trips_stored_bytes(bytes in any::<[u8; 16]>(), layout in layout_strategy()) {
        let guid = Guid::from_bytes(bytes);
        let mut buffer = [0u8; Guid::MAX_ENCODED_LEN];
        let written = encode(&guid, layout, &mut buffer).unwrap();
        prop_assert_eq!(written, layout.encoded_len(OutputEncoding::Utf8));

        let text = std::str::from_utf8(&buffer[.. written]).unwrap();
        prop_assert!(!text.bytes().any(|byte| byte.is_ascii_uppercase()));
        prop_assert_eq!(stored_bytes_from_text(text).unwrap(), bytes);
    }

    #[test]
    fn short_buffers_always_fail(
        bytes in any::<[u8; 16]>(),
        layout in layout_strategy(),
        encoding in encoding_strategy(),
        shortfall in 1usize .. 8,
    ) {
        let guid = Guid::from_bytes(bytes);
        let required = layout.encoded_len(encoding);
        let capacity = required.saturating_sub(shortfall);
        let mut backing = vec![0x55u8; required + 4];
        let result = encode_with(&guid, layout, encoding, &mut backing[.. capacity]);
        prop_assert_eq!(result, Err(EncodeError::BufferTooSmall { required, capacity }));
        prop_assert!(backing[capacity ..].iter().all(|&byte| byte == 0x55));
    }

    #[test]
    fn dashed_layouts_share_text(bytes in any::<[u8; 16]>()) {
        let guid = Guid::from_bytes(bytes);
        prop_assert_eq!(
            guid.display(GuidLayout::Dashed).to_string(),
            guid.display(GuidLayout::DashedNoPrefix).to_string()
        );
        let dashed = guid.display(GuidLayout::Dashed).to_string();
        prop_assert_eq!(guid.display(GuidLayout::BraceWrapped).to_string(), format!("{{{dashed}}}"));
        prop_assert_eq!(guid.display(GuidLayout::ParenWrapped).to_string(), format!("({dashed})"));
        prop_assert_eq!(guid.display(GuidLayout::CompactNoDashes).to_string(), dashed.replace('-', ""));
    }
}
