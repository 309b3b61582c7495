use std::future::Future;
use std::sync::Arc;
use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

use alpaca_core::{
    DateRange, MarketDataProvider, NewsRequest, PriceRequest, SourceErrorKind, Symbol,
    YahooProvider,
};
use time::macros::date;

#[derive(Clone)]
struct ProviderCase {
    label: &'static str,
    source: Arc<dyn MarketDataProvider>,
}

fn provider_cases() -> Vec<ProviderCase> {
    vec![
        ProviderCase {
            label: "yahoo-mock-adjusted",
            source: Arc::new(YahooProvider::default()),
        },
        ProviderCase {
            label: "yahoo-mock-raw",
            source: Arc::new(
                YahooProvider::builder()
                    .with_mock_mode()
                    .with_adjusted_prices(false)
                    .build(),
            ),
        },
    ]
}

fn quarter() -> DateRange {
    DateRange::new(date!(2024 - 01 - 01), date!(2024 - 04 - 01)).expect("valid range")
}

#[test]
fn prices_are_strictly_ascending_and_inside_the_window() {
    for case in provider_cases() {
        for ticker in ["AAPL", "^GSPC", "BRK-B"] {
            let request = PriceRequest::new(Symbol::parse(ticker).expect("symbol"), quarter());
            let series = block_on(case.source.fetch_prices(request)).unwrap_or_else(|error| {
                panic!("provider '{}' prices for {ticker} failed: {error}", case.label)
            });

            assert!(!series.is_empty(), "provider '{}': {ticker} bars", case.label);
            assert_eq!(series.symbol().as_str(), ticker, "provider '{}'", case.label);
            for pair in series.bars().windows(2) {
                assert!(
                    pair[0].date < pair[1].date,
                    "provider '{}': dates must strictly increase",
                    case.label
                );
            }
            for bar in series.bars() {
                assert!(quarter().contains(bar.date), "provider '{}': bar outside window", case.label);
                assert!(bar.high >= bar.low, "provider '{}': high >= low", case.label);
                assert!(bar.close > 0.0, "provider '{}': positive close", case.label);
            }
        }
    }
}

#[test]
fn prices_are_deterministic_per_symbol() {
    for case in provider_cases() {
        let request = PriceRequest::new(Symbol::parse("MSFT").expect("symbol"), quarter());
        let first = block_on(case.source.fetch_prices(request.clone())).expect("first");
        let second = block_on(case.source.fetch_prices(request)).expect("second");
        assert_eq!(first, second, "provider '{}'", case.label);
    }
}

#[test]
fn news_never_exceeds_the_requested_limit() {
    for case in provider_cases() {
        for limit in [1, 2, 3, 10] {
            let request = NewsRequest::new(Symbol::parse("TSLA").expect("symbol"), limit)
                .expect("valid request");
            let records = block_on(case.source.fetch_news(request)).unwrap_or_else(|error| {
                panic!("provider '{}' news failed: {error}", case.label)
            });
            assert!(records.len() <= limit, "provider '{}': limit {limit}", case.label);
        }
    }
}

#[test]
fn zero_news_limit_is_rejected_before_reaching_a_provider() {
    let error = NewsRequest::new(Symbol::parse("TSLA").expect("symbol"), 0)
        .expect_err("zero limit");
    assert_eq!(error.kind(), SourceErrorKind::InvalidRequest);
    assert_eq!(error.code(), "source.invalid_request");
}

#[test]
fn providers_report_a_name() {
    for case in provider_cases() {
        assert!(!case.source.name().is_empty(), "provider '{}'", case.label);
    }
}

fn block_on<F>(future: F) -> F::Output
where
    F: Future,
{
    let waker = noop_waker();
    let mut context = Context::from_waker(&waker);
    let mut future = std::pin::pin!(future);

    loop {
        match future.as_mut().poll(&mut context) {
            Poll::Ready(output) => return output,
            Poll::Pending => std::thread::yield_now(),
        }
    }
}

fn noop_waker() -> Waker {
    // SAFETY: The vtable functions never dereference the data pointer and are no-op operations.
    unsafe { Waker::from_raw(noop_raw_waker()) }
}

fn noop_raw_waker() -> RawWaker {
    RawWaker::new(std::ptr::null(), &NOOP_RAW_WAKER_VTABLE)
}

unsafe fn noop_raw_waker_clone(_: *const ()) -> RawWaker {
    noop_raw_waker()
}

unsafe fn noop_raw_waker_wake(_: *const ()) {}

unsafe fn noop_raw_waker_wake_by_ref(_: *const ()) {}

unsafe fn noop_raw_waker_drop(_: *const ()) {}

static NOOP_RAW_WAKER_VTABLE: RawWakerVTable = RawWakerVTable::new(
    noop_raw_waker_clone,
    noop_raw_waker_wake,
    noop_raw_waker_wake_by_ref,
    noop_raw_waker_drop,
);
