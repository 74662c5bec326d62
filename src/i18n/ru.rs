use crate::tr;

// Purge
tr!(PURGING_WHOLE_REPO, "Очистка всего репозитория {}");
tr!(PURGING_SCOPE, "Очистка: {}");

tr!(PURGED, "очищен");
tr!(NOT_DUE, "очистка не требуется");
tr!(FAILED, "ошибка");
tr!(REASON_BOOTSTRAP, "предыдущих очисток не было");
tr!(REASON_BUILDS, "сборок с последней очистки: {}");
tr!(REASON_DAYS, "дней с последней очистки: {}");
tr!(SOME_REPOS_FAILED, "Не удалось очистить репозиториев: {}.");

// Init
tr!(INIT_SCOPES, "Введите через запятую группы для очистки:");
tr!(INIT_SCOPES_HELP, "Оставьте пустым, чтобы использовать глобальную настройку или очищать весь репозиторий.");
tr!(INIT_BUILDS, "Очищать каждые сколько сборок?");
tr!(INIT_DAYS, "Очищать каждые сколько дней?");
tr!(INIT_INHERIT_HELP, "Оставьте пустым, чтобы использовать глобальную настройку.");
tr!(INIT_REPOS, "Выберите репозитории, используемые проектом:");
tr!(INIT_DONE, "Настройка завершена. Запускайте `purge-local-repo run` перед каждой сборкой.");

tr!(REPO_PRIVATE, "Приватный (`.repository` в рабочей папке)");
tr!(REPO_DEFAULT, "По умолчанию (`~/.m2/repository`)");

tr!(MUST_BE_POSITIVE, "Должно быть > 0!");
tr!(NOT_A_NUMBER, "не является числом");

// Global
tr!(GLOBAL_SAVED, "Глобальные настройки сохранены.");
tr!(GLOBAL_CLEARED, "Глобальные настройки сброшены.");

// Status
tr!(STATUS_EFFECTIVE, "Действующая конфигурация:");
tr!(SCOPES, "Группы");
tr!(NUMBER_OF_BUILDS, "Число сборок");
tr!(NUMBER_OF_DAYS, "Число дней");
tr!(WHOLE_REPOSITORY, "весь репозиторий");
tr!(NOT_SET, "не задано");
tr!(NEVER_PURGED, "ещё не очищался");
tr!(LAST_PURGE, "последняя очистка: сборка {1}, {2}");
tr!(STATE_UNREADABLE, "состояние не читается");

tr!(NO_REPOSITORIES, "Для проекта не настроены репозитории. Выполните `purge-local-repo init` или укажите `--repository`.");
