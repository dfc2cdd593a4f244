//! 依赖注入容器
//!
//! 把 Repository 实现、会话 Cookie 服务和缓存失效器组装成所有控制器。

use std::sync::Arc;

use domain::{
    AuthRepository, ChatRepository, CitiesRepository, DomainsRepository, EstablishmentRepository,
    EstablishmentTypeRepository, FormationRepository, LevelsRepository, MentionsRepository,
    RegionsRepository, UsersRepository,
};

use crate::actions::UpdateFiltersAction;
use crate::controllers::{Controller, RefreshTokenController, SecuredController, SignOutController};
use crate::revalidation::CacheRevalidator;
use crate::session::SessionCookieService;
use crate::use_cases::*;

/// 所有 Repository 实现
#[derive(Clone)]
pub struct Repositories {
    pub auth: Arc<dyn AuthRepository>,
    pub chat: Arc<dyn ChatRepository>,
    pub levels: Arc<dyn LevelsRepository>,
    pub domains: Arc<dyn DomainsRepository>,
    pub establishments: Arc<dyn EstablishmentRepository>,
    pub establishment_types: Arc<dyn EstablishmentTypeRepository>,
    pub cities: Arc<dyn CitiesRepository>,
    pub regions: Arc<dyn RegionsRepository>,
    pub mentions: Arc<dyn MentionsRepository>,
    pub formations: Arc<dyn FormationRepository>,
    pub users: Arc<dyn UsersRepository>,
}

pub struct ApplicationContainer {
    pub sign_up: Controller<SignUpUseCase>,
    pub sign_in: Controller<SignInUseCase>,
    pub request_otp: Controller<RequestOtpUseCase>,
    pub sign_in_otp: Controller<SignInOtpUseCase>,
    pub refresh_token: RefreshTokenController,
    pub sign_out: SignOutController,
    pub current_user: SecuredController<GetCurrentUserUseCase>,
    pub get_user_by_email: SecuredController<GetUserByEmailUseCase>,
    pub get_user_by_id: SecuredController<GetUserByIdUseCase>,

    pub send_chat_message: SecuredController<SendChatMessageUseCase>,
    pub chat_history: SecuredController<GetChatHistoryUseCase>,

    pub get_levels: SecuredController<GetLevelsUseCase>,
    pub get_level: SecuredController<GetLevelUseCase>,
    pub create_level: SecuredController<CreateLevelUseCase>,
    pub update_level: SecuredController<UpdateLevelUseCase>,
    pub delete_level: SecuredController<DeleteLevelUseCase>,
    pub get_domains: SecuredController<GetDomainsUseCase>,
    pub get_domain: SecuredController<GetDomainUseCase>,
    pub create_domain: SecuredController<CreateDomainUseCase>,
    pub update_domain: SecuredController<UpdateDomainUseCase>,
    pub delete_domain: SecuredController<DeleteDomainUseCase>,
    pub filter_establishments: SecuredController<FilterEstablishmentsUseCase>,
    pub get_establishment: SecuredController<GetEstablishmentUseCase>,
    pub create_establishment: SecuredController<CreateEstablishmentUseCase>,
    pub update_establishment: SecuredController<UpdateEstablishmentUseCase>,
    pub delete_establishment: SecuredController<DeleteEstablishmentUseCase>,
    pub rate_establishment: SecuredController<RateEstablishmentUseCase>,
    pub get_establishment_types: SecuredController<GetEstablishmentTypesUseCase>,
    pub get_cities: SecuredController<GetCitiesUseCase>,
    pub filter_cities: SecuredController<FilterCitiesUseCase>,
    pub get_regions: SecuredController<GetRegionsUseCase>,
    pub get_mentions: SecuredController<GetMentionsUseCase>,
    pub get_formations: SecuredController<GetFormationsUseCase>,
    pub filter_formations: SecuredController<FilterFormationsUseCase>,

    pub update_filters: UpdateFiltersAction,
    pub cookie_service: Arc<dyn SessionCookieService>,
}

impl ApplicationContainer {
    pub fn new(
        repositories: Repositories,
        cookie_service: Arc<dyn SessionCookieService>,
        revalidator: Arc<dyn CacheRevalidator>,
    ) -> Self {
        let Repositories {
            auth,
            chat,
            levels,
            domains,
            establishments,
            establishment_types,
            cities,
            regions,
            mentions,
            formations,
            users,
        } = repositories;

        Self {
            sign_up: Controller::new(SignUpUseCase::new(auth.clone())),
            sign_in: Controller::new(SignInUseCase::new(auth.clone(), cookie_service.clone())),
            request_otp: Controller::new(RequestOtpUseCase::new(auth.clone())),
            sign_in_otp: Controller::new(SignInOtpUseCase::new(auth.clone(), cookie_service.clone())),
            refresh_token: RefreshTokenController::new(RefreshTokenUseCase::new(
                auth.clone(),
                cookie_service.clone(),
            )),
            sign_out: SignOutController::new(SignOutUseCase::new(auth.clone())),
            current_user: SecuredController::new(GetCurrentUserUseCase::new(auth)),
            get_user_by_email: SecuredController::new(GetUserByEmailUseCase::new(users.clone())),
            get_user_by_id: SecuredController::new(GetUserByIdUseCase::new(users)),

            send_chat_message: SecuredController::new(SendChatMessageUseCase::new(chat.clone())),
            chat_history: SecuredController::new(GetChatHistoryUseCase::new(chat)),

            get_levels: SecuredController::new(GetLevelsUseCase::new(levels.clone())),
            get_level: SecuredController::new(GetLevelUseCase::new(levels.clone())),
            create_level: SecuredController::new(CreateLevelUseCase::new(levels.clone())),
            update_level: SecuredController::new(UpdateLevelUseCase::new(levels.clone())),
            delete_level: SecuredController::new(DeleteLevelUseCase::new(levels)),
            get_domains: SecuredController::new(GetDomainsUseCase::new(domains.clone())),
            get_domain: SecuredController::new(GetDomainUseCase::new(domains.clone())),
            create_domain: SecuredController::new(CreateDomainUseCase::new(domains.clone())),
            update_domain: SecuredController::new(UpdateDomainUseCase::new(domains.clone())),
            delete_domain: SecuredController::new(DeleteDomainUseCase::new(domains)),
            filter_establishments: SecuredController::new(FilterEstablishmentsUseCase::new(
                establishments.clone(),
            )),
            get_establishment: SecuredController::new(GetEstablishmentUseCase::new(
                establishments.clone(),
            )),
            create_establishment: SecuredController::new(CreateEstablishmentUseCase::new(
                establishments.clone(),
            )),
            update_establishment: SecuredController::new(UpdateEstablishmentUseCase::new(
                establishments.clone(),
            )),
            delete_establishment: SecuredController::new(DeleteEstablishmentUseCase::new(
                establishments.clone(),
            )),
            rate_establishment: SecuredController::new(RateEstablishmentUseCase::new(establishments)),
            get_establishment_types: SecuredController::new(GetEstablishmentTypesUseCase::new(
                establishment_types,
            )),
            get_cities: SecuredController::new(GetCitiesUseCase::new(cities.clone())),
            filter_cities: SecuredController::new(FilterCitiesUseCase::new(cities)),
            get_regions: SecuredController::new(GetRegionsUseCase::new(regions)),
            get_mentions: SecuredController::new(GetMentionsUseCase::new(mentions)),
            get_formations: SecuredController::new(GetFormationsUseCase::new(formations.clone())),
            filter_formations: SecuredController::new(FilterFormationsUseCase::new(formations)),

            update_filters: UpdateFiltersAction::new(revalidator),
            cookie_service,
        }
    }
}
