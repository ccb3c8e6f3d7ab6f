use shared::Movie;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::composite::favorite_button::FavoriteButton;
use crate::router::Route;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub movie: Movie,
    #[prop_or_default]
    pub footer: Option<Html>,
}

#[function_component(MovieCard)]
pub fn movie_card(props: &Props) -> Html {
    let movie = &props.movie;
    let detail = Route::MovieDetail {
        id: movie.movie_id.clone(),
    };
    let genres = movie.genres().collect::<Vec<_>>().join(" / ");

    html! {
        <div class="card h-100">
            <img src={movie.img.content.clone()} class="card-img-top" alt={movie.title.clone()} />
            <div class="card-body">
                <h5 class="card-title">
                    <Link<Route> to={detail.clone()}>{&movie.title}</Link<Route>>
                </h5>
                <h6 class="card-subtitle mb-2 text-body-secondary">{genres}</h6>
                <p class="card-text text-truncate">{&movie.description}</p>
            </div>
            <div class="card-footer d-flex justify-content-between">
                <FavoriteButton movie_id={movie.movie_id.clone()} return_path={detail.to_path()} />
                { props.footer.clone().unwrap_or_default() }
            </div>
        </div>
    }
}
