/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client-side pagination over the marker convention.
//!
//! List-style operations thread an opaque continuation token: the request
//! carries `Marker` (absent on the first call) and usually a `MaxItems` hint;
//! the result reports `IsTruncated` (absent reads as false) and, while
//! truncated, the `Marker` to echo into the next request. Repeating that
//! exchange until `IsTruncated` clears enumerates the backing collection
//! exactly once — the service guarantees no gaps or duplicates against a
//! stable collection.
//!
//! [`Paginator`] packages the loop. It is built from an input shape plus a
//! caller-supplied transport function and issues one transport call per page,
//! on demand:
//!
//! ```no_run
//! # mod my_transport {
//! #     #[derive(Clone)]
//! #     pub struct Client;
//! #     pub struct Error;
//! #     impl Client {
//! #         pub async fn list_users(
//! #             &self,
//! #             _input: iam::input::ListUsersInput,
//! #         ) -> Result<iam::output::ListUsersOutput, Error> {
//! #             unimplemented!()
//! #         }
//! #     }
//! # }
//! # async fn docs(client: my_transport::Client) -> Result<(), my_transport::Error> {
//! use iam::input::ListUsersInput;
//!
//! let mut pages = ListUsersInput::builder()
//!     .path_prefix("/engineering/")
//!     .build()
//!     .into_paginator(move |input| {
//!         let client = client.clone();
//!         async move { client.list_users(input).await }
//!     })
//!     .page_size(100)
//!     .send();
//! while let Some(page) = pages.try_next().await? {
//!     for user in page.users().unwrap_or_default() {
//!         println!("{:?}", user.user_name());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A stream is single-use and lazy; dropping it mid-way simply stops issuing
//! requests. To start over, build a new paginator from the input.

use std::collections::VecDeque;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// A request shape that carries a continuation marker.
pub trait PaginatedRequest {
    /// The marker this request will be sent with.
    fn marker(&self) -> Option<&str>;
    /// Replaces the marker for the next page request.
    fn set_marker(&mut self, marker: Option<String>);
}

/// A request shape that accepts a page size hint.
pub trait PageSizeHint {
    /// Replaces the `MaxItems` hint. The service uses its own default when
    /// absent (100 for most operations) and may return fewer items than
    /// requested either way.
    fn set_max_items(&mut self, max_items: Option<i32>);
}

/// A result shape that reports truncation and a continuation marker.
pub trait PaginatedResult {
    /// Whether more items exist beyond this page. Absent reads as false.
    fn is_truncated(&self) -> bool;
    /// The marker to continue with. Meaningful only while truncated.
    fn marker(&self) -> Option<&str>;
}

/// A paginated result with one primary item collection worth flattening.
pub trait PagedItems: PaginatedResult {
    /// The element type of the primary collection.
    type Item;
    /// Surrenders this page's items. An absent collection yields no items.
    fn into_pagination_items(self) -> Vec<Self::Item>;
}

type PageFuture<O, E> = Pin<Box<dyn Future<Output = Result<O, E>> + Send>>;

/// Lazily paginates one operation. Created via `into_paginator` on a
/// paginated input shape, or [`Paginator::new`] for generic callers.
pub struct Paginator<I, S> {
    input: I,
    send: S,
}

impl<I, S> Paginator<I, S> {
    /// Wraps `input` with the transport function that will dispatch each
    /// page request.
    pub fn new(input: I, send: S) -> Self {
        Paginator { input, send }
    }

    /// Sets the page size hint sent with every page request.
    pub fn page_size(mut self, max_items: i32) -> Self
    where
        I: PageSizeHint,
    {
        self.input.set_max_items(Some(max_items));
        self
    }

    /// Flattens pages into their items.
    pub fn items(self) -> ItemPaginator<I, S> {
        ItemPaginator { inner: self }
    }

    /// Starts the stream. No request is issued until the first page is
    /// demanded.
    pub fn send<O, E, Fut>(self) -> PageStream<I, O, E>
    where
        I: PaginatedRequest + Clone,
        O: PaginatedResult,
        S: FnMut(I) -> Fut + Send + 'static,
        Fut: Future<Output = Result<O, E>> + Send + 'static,
    {
        let mut send = self.send;
        PageStream {
            input: Some(self.input),
            send: Box::new(move |input| Box::pin(send(input))),
        }
    }
}

impl<I: fmt::Debug, S> fmt::Debug for Paginator<I, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("input", &self.input)
            .finish_non_exhaustive()
    }
}

/// A lazy stream of result pages. One transport call per demanded page.
pub struct PageStream<I, O, E> {
    /// The input for the next page; `None` once the stream is exhausted.
    input: Option<I>,
    send: Box<dyn FnMut(I) -> PageFuture<O, E> + Send>,
}

impl<I, O, E> PageStream<I, O, E>
where
    I: PaginatedRequest + Clone,
    O: PaginatedResult,
{
    /// Fetches the next page, or `None` once the final page has been
    /// yielded. An error page is yielded once and ends the stream.
    pub async fn next(&mut self) -> Option<Result<O, E>> {
        let input = self.input.take()?;
        let result = (self.send)(input.clone()).await;
        match &result {
            Ok(page) if page.is_truncated() => match page.marker() {
                Some(next_marker) if Some(next_marker) != input.marker() => {
                    tracing::trace!(marker = %next_marker, "advancing to next page");
                    let mut next_input = input;
                    next_input.set_marker(Some(next_marker.to_owned()));
                    self.input = Some(next_input);
                }
                Some(_) => {
                    tracing::warn!(
                        "page marker did not advance; ending pagination to avoid an infinite loop"
                    );
                }
                None => {
                    tracing::warn!("truncated page carried no marker; ending pagination");
                }
            },
            Ok(_) | Err(_) => {}
        }
        Some(result)
    }

    /// Fetches the next page, surfacing errors `Result`-first for use with
    /// `?`.
    pub async fn try_next(&mut self) -> Result<Option<O>, E> {
        self.next().await.transpose()
    }

    /// Drains the stream, collecting every page. Stops at the first error.
    pub async fn try_collect(mut self) -> Result<Vec<O>, E> {
        let mut pages = Vec::new();
        while let Some(page) = self.next().await {
            pages.push(page?);
        }
        Ok(pages)
    }
}

impl<I, O, E> fmt::Debug for PageStream<I, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PageStream<{}>", std::any::type_name::<O>())
    }
}

/// A [`Paginator`] that flattens pages into their primary items.
#[derive(Debug)]
pub struct ItemPaginator<I, S> {
    inner: Paginator<I, S>,
}

impl<I, S> ItemPaginator<I, S> {
    /// Starts the stream. Requests are issued page by page as items are
    /// demanded; empty pages are skipped.
    pub fn send<O, E, Fut>(self) -> ItemStream<I, O, E>
    where
        I: PaginatedRequest + Clone,
        O: PagedItems,
        S: FnMut(I) -> Fut + Send + 'static,
        Fut: Future<Output = Result<O, E>> + Send + 'static,
    {
        ItemStream {
            pages: self.inner.send(),
            buffer: VecDeque::new(),
        }
    }
}

/// A lazy stream of items drawn from successive pages.
pub struct ItemStream<I, O: PagedItems, E> {
    pages: PageStream<I, O, E>,
    buffer: VecDeque<O::Item>,
}

impl<I, O, E> ItemStream<I, O, E>
where
    I: PaginatedRequest + Clone,
    O: PagedItems,
{
    /// Yields the next item, fetching further pages as needed, or `None`
    /// once the final page is drained. An error is yielded once and ends the
    /// stream.
    pub async fn next(&mut self) -> Option<Result<O::Item, E>> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Some(Ok(item));
            }
            match self.pages.next().await? {
                Ok(page) => self.buffer.extend(page.into_pagination_items()),
                Err(err) => return Some(Err(err)),
            }
        }
    }

    /// Yields the next item, surfacing errors `Result`-first for use with
    /// `?`.
    pub async fn try_next(&mut self) -> Result<Option<O::Item>, E> {
        self.next().await.transpose()
    }

    /// Drains the stream, collecting every item. Stops at the first error.
    pub async fn try_collect(mut self) -> Result<Vec<O::Item>, E> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await {
            items.push(item?);
        }
        Ok(items)
    }
}

impl<I, O: PagedItems, E> fmt::Debug for ItemStream<I, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemStream<{}>", std::any::type_name::<O::Item>())
    }
}

/// Wires an input/output pair into the pagination traits. The default form
/// covers operations with both `Marker` and `MaxItems`; `marker_only` covers
/// the few without a page size hint; `items:` names the primary collection
/// to flatten.
macro_rules! paginated {
    (@markers $input:ty => $output:ty) => {
        impl PaginatedRequest for $input {
            fn marker(&self) -> Option<&str> {
                self.marker.as_deref()
            }
            fn set_marker(&mut self, marker: Option<String>) {
                self.marker = marker;
            }
        }
        impl PaginatedResult for $output {
            fn is_truncated(&self) -> bool {
                self.is_truncated.unwrap_or_default()
            }
            fn marker(&self) -> Option<&str> {
                self.marker.as_deref()
            }
        }
        impl $input {
            /// Wraps this request in a [`Paginator`] driven by `send`, which
            /// dispatches one page request per call.
            pub fn into_paginator<S>(self, send: S) -> Paginator<Self, S> {
                Paginator::new(self, send)
            }
        }
    };
    (@items $output:ty, $items:ident -> $item:ty) => {
        impl PagedItems for $output {
            type Item = $item;
            fn into_pagination_items(mut self) -> Vec<$item> {
                self.$items.take().unwrap_or_default()
            }
        }
    };
    (marker_only $input:ty => $output:ty $(, items: $items:ident -> $item:ty)?) => {
        paginated!(@markers $input => $output);
        $(paginated!(@items $output, $items -> $item);)?
    };
    ($input:ty => $output:ty $(, items: $items:ident -> $item:ty)?) => {
        paginated!(@markers $input => $output);
        impl PageSizeHint for $input {
            fn set_max_items(&mut self, max_items: Option<i32>) {
                self.max_items = max_items;
            }
        }
        $(paginated!(@items $output, $items -> $item);)?
    };
}

use crate::input::*;
use crate::model;
use crate::output::*;

paginated!(ListUsersInput => ListUsersOutput, items: users -> model::User);
paginated!(ListUserTagsInput => ListUserTagsOutput, items: tags -> model::Tag);
paginated!(GetGroupInput => GetGroupOutput, items: users -> model::User);
paginated!(ListGroupsInput => ListGroupsOutput, items: groups -> model::Group);
paginated!(ListGroupsForUserInput => ListGroupsForUserOutput, items: groups -> model::Group);
paginated!(ListRolesInput => ListRolesOutput, items: roles -> model::Role);
paginated!(ListRoleTagsInput => ListRoleTagsOutput, items: tags -> model::Tag);
paginated!(ListPoliciesInput => ListPoliciesOutput, items: policies -> model::Policy);
paginated!(ListPolicyVersionsInput => ListPolicyVersionsOutput, items: versions -> model::PolicyVersion);
paginated!(ListEntitiesForPolicyInput => ListEntitiesForPolicyOutput);
paginated!(ListAttachedUserPoliciesInput => ListAttachedUserPoliciesOutput, items: attached_policies -> model::AttachedPolicy);
paginated!(ListAttachedGroupPoliciesInput => ListAttachedGroupPoliciesOutput, items: attached_policies -> model::AttachedPolicy);
paginated!(ListAttachedRolePoliciesInput => ListAttachedRolePoliciesOutput, items: attached_policies -> model::AttachedPolicy);
paginated!(ListUserPoliciesInput => ListUserPoliciesOutput, items: policy_names -> String);
paginated!(ListGroupPoliciesInput => ListGroupPoliciesOutput, items: policy_names -> String);
paginated!(ListRolePoliciesInput => ListRolePoliciesOutput, items: policy_names -> String);
paginated!(ListAccessKeysInput => ListAccessKeysOutput, items: access_key_metadata -> model::AccessKeyMetadata);
paginated!(ListMfaDevicesInput => ListMfaDevicesOutput, items: mfa_devices -> model::MfaDevice);
paginated!(ListVirtualMfaDevicesInput => ListVirtualMfaDevicesOutput, items: virtual_mfa_devices -> model::VirtualMfaDevice);
paginated!(ListAccountAliasesInput => ListAccountAliasesOutput, items: account_aliases -> String);
paginated!(GetAccountAuthorizationDetailsInput => GetAccountAuthorizationDetailsOutput);
paginated!(GetServiceLastAccessedDetailsInput => GetServiceLastAccessedDetailsOutput, items: services_last_accessed -> model::ServiceLastAccessed);
paginated!(marker_only ListPoliciesGrantingServiceAccessInput => ListPoliciesGrantingServiceAccessOutput, items: policies_granting_service_access -> model::ListPoliciesGrantingServiceAccessEntry);
