use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center h-64 space-y-4">
            <h1 class="text-2xl font-bold">{"404 - Page Not Found"}</h1>
            <p class="text-gray-500">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Profile} classes="text-[#635BFF] font-medium">{"Back to your profile"}</Link<Route>>
        </div>
    }
}
