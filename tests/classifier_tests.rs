// tests for the classification relay

mod common;

use common::{Reply, Scripted, classifier, tweets};
use xfilter::{DEFAULT_RULE, Error, FailPolicy};

#[tokio::test]
async fn test_example_batch() {
    let provider = Scripted::new(Reply::Text("1. YES\n2. NO"));
    let c = classifier(provider.clone(), FailPolicy::Open);

    let results = c
        .classify(&tweets(&["Check out my new SaaS!", "I had pizza today"]), None)
        .await
        .unwrap();

    assert_eq!(results, vec![true, false]);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_default_rule_and_token_budget() {
    let provider = Scripted::new(Reply::Text("YES\nYES\nNO"));
    let c = classifier(provider.clone(), FailPolicy::Open);

    c.classify(&tweets(&["a", "b", "c"]), None).await.unwrap();

    let (prompt, max_tokens) = provider.last.lock().unwrap().clone().unwrap();
    assert!(prompt.body.contains(DEFAULT_RULE));
    assert_eq!(max_tokens, 15);
}

#[tokio::test]
async fn test_custom_rule_is_used() {
    let provider = Scripted::new(Reply::Text("NO"));
    let c = classifier(provider.clone(), FailPolicy::Open);

    c.classify(&tweets(&["x"]), Some("is it about cats?"))
        .await
        .unwrap();

    let (prompt, _) = provider.last.lock().unwrap().clone().unwrap();
    assert!(prompt.body.contains("\"is it about cats?\""));
    assert!(!prompt.body.contains(DEFAULT_RULE));
}

#[tokio::test]
async fn test_empty_batch_never_calls_provider() {
    let provider = Scripted::new(Reply::Text("YES"));
    let c = classifier(provider.clone(), FailPolicy::Open);

    for rule in [None, Some("anything")] {
        let err = c.classify(&[], rule).await.unwrap_err();
        assert!(matches!(err, Error::NoItems));
    }
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_count_mismatch_fails_open() {
    let provider = Scripted::new(Reply::Text("YES\nNO"));
    let c = classifier(provider, FailPolicy::Open);

    let results = c.classify(&tweets(&["a", "b", "c"]), None).await.unwrap();
    assert_eq!(results, vec![true, true, true]);
}

#[tokio::test]
async fn test_count_mismatch_fails_closed() {
    let provider = Scripted::new(Reply::Text("YES\nNO"));
    let c = classifier(provider, FailPolicy::Closed);

    let results = c.classify(&tweets(&["a", "b", "c"]), None).await.unwrap();
    assert_eq!(results, vec![false, false, false]);
}

#[tokio::test]
async fn test_empty_response_uses_policy() {
    let open = classifier(Scripted::new(Reply::Empty), FailPolicy::Open);
    let closed = classifier(Scripted::new(Reply::Empty), FailPolicy::Closed);

    let items = tweets(&["a", "b"]);
    assert_eq!(open.classify(&items, None).await.unwrap(), vec![true, true]);
    assert_eq!(closed.classify(&items, None).await.unwrap(), vec![false, false]);
}

#[tokio::test]
async fn test_content_filter_keeps_everything() {
    // regardless of policy, a moderation trip keeps the batch visible
    for policy in [FailPolicy::Open, FailPolicy::Closed] {
        let c = classifier(Scripted::new(Reply::ContentFilter), policy);
        let results = c.classify(&tweets(&["a", "b", "c", "d"]), None).await.unwrap();
        assert_eq!(results, vec![true; 4]);
    }
}

#[tokio::test]
async fn test_provider_error_propagates() {
    let c = classifier(Scripted::new(Reply::Fail), FailPolicy::Open);

    let err = c.classify(&tweets(&["a"]), None).await.unwrap_err();
    assert!(matches!(err, Error::Provider { status: 500, .. }));
    assert_eq!(err.status().as_u16(), 500);
}

#[tokio::test]
async fn test_results_align_with_input() {
    let provider = Scripted::new(Reply::Text("1. NO\n2. YES\n3. NO\n4. NO\n5. YES"));
    let c = classifier(provider, FailPolicy::Open);

    let items = tweets(&["a", "b", "c", "d", "e"]);
    let results = c.classify(&items, None).await.unwrap();

    assert_eq!(results.len(), items.len());
    assert_eq!(results, vec![false, true, false, false, true]);
}
