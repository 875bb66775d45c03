//! Site sub-client — site info, search, federation and the mod log.

use crate::client::LemmyClient;
use crate::domain::modlog::wire::{GetModlog, GetModlogResponse};
use crate::domain::site::wire::{
    CreateSite, EditSite, GetFederatedInstancesResponse, GetSiteMetadata,
    GetSiteMetadataResponse, GetSiteResponse, ResolveObject, ResolveObjectResponse, Search,
    SearchResponse, SiteResponse,
};
use crate::endpoints;
use crate::error::LemmyResult;

/// Sub-client for site-wide operations.
pub struct SiteClient<'a> {
    pub(crate) client: &'a LemmyClient,
}

impl<'a> SiteClient<'a> {
    /// Site info. With a credential attached, `my_user` is populated.
    pub async fn get(&self) -> LemmyResult<GetSiteResponse> {
        self.client.http.request(&endpoints::GET_SITE, &()).await
    }

    pub async fn create(&self, form: &CreateSite) -> LemmyResult<SiteResponse> {
        self.client.http.request(&endpoints::CREATE_SITE, form).await
    }

    pub async fn edit(&self, form: &EditSite) -> LemmyResult<SiteResponse> {
        self.client.http.request(&endpoints::EDIT_SITE, form).await
    }

    /// OpenGraph title, description and image for `url`.
    pub async fn get_site_metadata(&self, url: &str) -> LemmyResult<GetSiteMetadataResponse> {
        let form = GetSiteMetadata {
            url: url.to_string(),
        };
        self.client.http.request(&endpoints::GET_SITE_METADATA, &form).await
    }

    pub async fn get_federated_instances(&self) -> LemmyResult<GetFederatedInstancesResponse> {
        self.client
            .http
            .request(&endpoints::GET_FEDERATED_INSTANCES, &())
            .await
    }

    pub async fn resolve_object(&self, q: &str) -> LemmyResult<ResolveObjectResponse> {
        let form = ResolveObject { q: q.to_string() };
        self.client.http.request(&endpoints::RESOLVE_OBJECT, &form).await
    }

    pub async fn search(&self, form: &Search) -> LemmyResult<SearchResponse> {
        self.client.http.request(&endpoints::SEARCH, form).await
    }

    pub async fn get_modlog(&self, form: &GetModlog) -> LemmyResult<GetModlogResponse> {
        self.client.http.request(&endpoints::GET_MODLOG, form).await
    }

    /// Give up admin rights on this instance.
    pub async fn leave_admin(&self) -> LemmyResult<GetSiteResponse> {
        self.client.http.request(&endpoints::LEAVE_ADMIN, &()).await
    }
}
