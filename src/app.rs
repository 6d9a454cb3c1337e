//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::private_route::PrivateRoute;
use crate::pages::{
    campaign_details::CampaignDetailsPage, campaigns::CampaignsPage, donor_dashboard::DonorDashboardPage,
    home::HomePage, login::LoginPage, my_campaigns::MyCampaignsPage, ngo_dashboard::NgoDashboardPage,
    ngo_register::NgoRegisterPage, ngos::NgosPage, not_found::NotFoundPage, profile::ProfilePage,
    register::RegisterPage,
};
use crate::state::session::SessionContext;

/// Root application component.
///
/// `session` must already be initialized; every route reads it from context.
#[component]
pub fn App(session: SessionContext) -> impl IntoView {
    provide_meta_context();
    provide_context(session);

    view! {
        <Title text="Bright Ethiopia"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("ngo-register") view=NgoRegisterPage/>
                    <Route path=StaticSegment("ngos") view=NgosPage/>
                    <Route path=StaticSegment("campaigns") view=CampaignsPage/>
                    <Route path=(StaticSegment("campaign"), ParamSegment("id")) view=CampaignDetailsPage/>
                    <Route
                        path=(StaticSegment("donor-dashboard"), ParamSegment("id"))
                        view=|| view! { <PrivateRoute><DonorDashboardPage/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("ngo-dashboard"), ParamSegment("id"))
                        view=|| view! { <PrivateRoute><NgoDashboardPage/></PrivateRoute> }
                    />
                    <Route
                        path=StaticSegment("my-campaigns")
                        view=|| view! { <PrivateRoute><MyCampaignsPage/></PrivateRoute> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <PrivateRoute><ProfilePage/></PrivateRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
