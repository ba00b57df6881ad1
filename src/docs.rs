use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::genre::handler::list_genres,
        crate::modules::genre::handler::get_genre,
        crate::modules::genre::handler::create_genre,
        crate::modules::genre::handler::update_genre,
        crate::modules::genre::handler::delete_genre,
        crate::modules::movie::handler::list_movies,
        crate::modules::movie::handler::get_movie,
        crate::modules::movie::handler::get_movies_by_genre,
        crate::modules::movie::handler::create_movie,
        crate::modules::movie::handler::update_movie,
        crate::modules::movie::handler::delete_movie,
    ),
    components(
        schemas(
            crate::modules::genre::model::Genre,
            crate::modules::genre::dto::CreateGenreRequest,
            crate::modules::genre::dto::UpdateGenreRequest,
            crate::modules::movie::model::Movie,
            crate::modules::movie::dto::MovieDetails,
        )
    ),
    tags(
        (name = "Genres", description = "Genre catalog"),
        (name = "Movies", description = "Movie catalog with poster upload")
    )
)]
pub struct ApiDoc;
