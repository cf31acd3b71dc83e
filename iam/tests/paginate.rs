/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Paginator tests against an in-memory stub transport: marker threading,
//! item flattening, lazy dispatch, termination, and the defensive guards.

use iam::input::ListUsersInput;
use iam::model::User;
use iam::output::ListUsersOutput;
use iam::paginate::PaginatedRequest;
use iam::{Error, SdkError};
use std::collections::VecDeque;
use std::future::{self, Ready};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

type PageResult = Result<ListUsersOutput, SdkError<Error, &'static str>>;

fn user(name: &str) -> User {
    User::builder().user_name(name).build()
}

fn page(names: &[&str], next_marker: Option<&str>) -> ListUsersOutput {
    let mut builder = ListUsersOutput::builder()
        .set_users(Some(names.iter().copied().map(user).collect()))
        .is_truncated(next_marker.is_some());
    if let Some(marker) = next_marker {
        builder = builder.marker(marker);
    }
    builder.build()
}

/// A transport stub that pops one scripted page per call, asserting the
/// marker each request was sent with.
fn stub(
    script: Vec<(Option<&'static str>, PageResult)>,
    calls: Arc<AtomicUsize>,
) -> impl FnMut(ListUsersInput) -> Ready<PageResult> + Send + 'static {
    let mut script = VecDeque::from(script);
    move |input: ListUsersInput| {
        calls.fetch_add(1, Ordering::SeqCst);
        let (expected_marker, result) = script
            .pop_front()
            .expect("transport called more often than scripted");
        assert_eq!(PaginatedRequest::marker(&input), expected_marker);
        future::ready(result)
    }
}

#[tokio::test]
async fn pages_visit_every_item_exactly_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let script = vec![
        (None, Ok(page(&["alice", "bob"], Some("m1")))),
        (Some("m1"), Ok(page(&["carol", "dave"], Some("m2")))),
        (Some("m2"), Ok(page(&["erin"], None))),
    ];
    let pages = ListUsersInput::builder()
        .build()
        .into_paginator(stub(script, Arc::clone(&calls)))
        .send();

    let collected = pages.try_collect().await.expect("no page errors");
    let names: Vec<_> = collected
        .iter()
        .flat_map(|page| page.users().unwrap_or_default())
        .map(|user| user.user_name().unwrap_or_default().to_owned())
        .collect();
    assert_eq!(names, ["alice", "bob", "carol", "dave", "erin"]);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn item_stream_flattens_pages_and_skips_empty_ones() {
    let calls = Arc::new(AtomicUsize::new(0));
    let script = vec![
        (None, Ok(page(&["alice"], Some("m1")))),
        (Some("m1"), Ok(page(&[], Some("m2")))),
        (Some("m2"), Ok(page(&["bob"], None))),
    ];
    let items = ListUsersInput::builder()
        .build()
        .into_paginator(stub(script, Arc::clone(&calls)))
        .items()
        .send();

    let collected = items.try_collect().await.expect("no page errors");
    let names: Vec<_> = collected
        .iter()
        .map(|user| user.user_name().unwrap_or_default())
        .collect();
    assert_eq!(names, ["alice", "bob"]);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn page_size_hint_is_sent_with_every_request() {
    let calls = Arc::new(AtomicUsize::new(0));
    let observed = Arc::new(AtomicUsize::new(0));
    let observed_in_stub = Arc::clone(&observed);
    let mut script = VecDeque::from(vec![
        Ok(page(&["alice"], Some("m1"))),
        Ok(page(&["bob"], None)),
    ]);
    let calls_in_stub = Arc::clone(&calls);
    let mut pages = ListUsersInput::builder()
        .build()
        .into_paginator(move |input: ListUsersInput| {
            calls_in_stub.fetch_add(1, Ordering::SeqCst);
            observed_in_stub.fetch_add(input.max_items().unwrap_or_default() as usize, Ordering::SeqCst);
            future::ready::<PageResult>(script.pop_front().expect("over-called"))
        })
        .page_size(2)
        .send();

    while pages.try_next().await.expect("no page errors").is_some() {}
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    // MaxItems=2 observed on both requests.
    assert_eq!(observed.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn no_request_is_issued_until_a_page_is_demanded() {
    let calls = Arc::new(AtomicUsize::new(0));
    let script = vec![(None, Ok(page(&["alice"], None)))];
    let mut pages = ListUsersInput::builder()
        .build()
        .into_paginator(stub(script, Arc::clone(&calls)))
        .send();

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(pages.try_next().await.expect("no page errors").is_some());
    assert!(pages.try_next().await.expect("no page errors").is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn an_error_page_is_yielded_once_and_ends_the_stream() {
    let calls = Arc::new(AtomicUsize::new(0));
    let script = vec![
        (None, Ok(page(&["alice"], Some("m1")))),
        (Some("m1"), Err(SdkError::dispatch_failure("connection reset"))),
    ];
    let mut pages = ListUsersInput::builder()
        .build()
        .into_paginator(stub(script, Arc::clone(&calls)))
        .send();

    assert!(pages.next().await.expect("first page").is_ok());
    assert!(pages.next().await.expect("error page").is_err());
    assert!(pages.next().await.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn a_service_error_surfaces_the_modeled_exception() {
    let calls = Arc::new(AtomicUsize::new(0));
    let meta = shape_types::error::Error::builder()
        .code("NoSuchEntity")
        .message("The user with name ghost cannot be found.")
        .build();
    let script = vec![(
        None,
        Err(SdkError::service_error(
            http::Response::new("<ErrorResponse/>"),
            Error::from(meta),
        )),
    )];
    let mut pages = ListUsersInput::builder()
        .path_prefix("/ghost/")
        .build()
        .into_paginator(stub(script, Arc::clone(&calls)))
        .send();

    let err = pages
        .try_next()
        .await
        .expect_err("the only page is an error");
    let service_err = err.into_service_error().expect("a modeled service error");
    assert_eq!(service_err.code(), Some("NoSuchEntity"));
    assert!(matches!(service_err, Error::NoSuchEntityException(_)));
    assert!(pages.next().await.is_none());
}

#[tokio::test]
async fn a_marker_that_does_not_advance_ends_the_stream() {
    let calls = Arc::new(AtomicUsize::new(0));
    let script = vec![
        (None, Ok(page(&["alice"], Some("m1")))),
        // Truncated but echoing the marker it was asked for: a stream that
        // trusted it would loop forever.
        (Some("m1"), Ok(page(&["bob"], Some("m1")))),
    ];
    let pages = ListUsersInput::builder()
        .build()
        .into_paginator(stub(script, Arc::clone(&calls)))
        .send();

    let collected = pages.try_collect().await.expect("no page errors");
    assert_eq!(collected.len(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn a_truncated_page_without_a_marker_ends_the_stream() {
    let calls = Arc::new(AtomicUsize::new(0));
    let truncated_no_marker = ListUsersOutput::builder()
        .set_users(Some(vec![user("alice")]))
        .is_truncated(true)
        .build();
    let script = vec![(None, Ok(truncated_no_marker))];
    let pages = ListUsersInput::builder()
        .build()
        .into_paginator(stub(script, Arc::clone(&calls)))
        .send();

    let collected = pages.try_collect().await.expect("no page errors");
    assert_eq!(collected.len(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn pagination_restarts_from_the_beginning_per_paginator() {
    let input = ListUsersInput::builder().path_prefix("/staff/").build();
    for _ in 0..2 {
        let calls = Arc::new(AtomicUsize::new(0));
        let script = vec![
            (None, Ok(page(&["alice"], Some("m1")))),
            (Some("m1"), Ok(page(&["bob"], None))),
        ];
        let pages = input
            .clone()
            .into_paginator(stub(script, Arc::clone(&calls)))
            .send();
        let collected = pages.try_collect().await.expect("no page errors");
        assert_eq!(collected.len(), 2);
    }
}
